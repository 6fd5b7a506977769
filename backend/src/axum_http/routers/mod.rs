pub mod admin_refunds;
pub mod admin_wallets;
pub mod location;
