pub mod rate_client;
