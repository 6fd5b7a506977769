use url::Url;

use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub backend_server: BackendServer,
    pub database: Database,
    pub redis: Redis,
    pub admin_secret: AdminSecret,
    pub shipping_rate: ShippingRate,
    pub stage: Stage,
    pub service_name: String,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BackendServer {
    pub port: u16,
    /// MiB.
    pub body_limit: u64,
    /// Seconds.
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
    pub max_pool_size: u32,
}

#[derive(Debug, Clone)]
pub struct Redis {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct AdminSecret {
    pub secret: String,
}

#[derive(Debug, Clone)]
pub struct ShippingRate {
    pub base_url: Url,
    pub api_key: String,
    pub cache_ttl_seconds: u64,
}
