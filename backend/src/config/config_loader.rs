use anyhow::{Context, Result};
use url::Url;

use super::{
    config_model::{AdminSecret, BackendServer, Database, DotEnvyConfig, Redis, ShippingRate},
    stage::Stage,
};

const DEFAULT_MAX_POOL_SIZE: u32 = 10;
const DEFAULT_SHIPPING_COST_CACHE_TTL_SECONDS: u64 = 60 * 60 * 24;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = BackendServer {
        port: required("SERVER_PORT_BACKEND")?
            .parse::<u16>()
            .context("SERVER_PORT_BACKEND is invalid")?,
        body_limit: required("SERVER_BODY_LIMIT")?
            .parse::<u64>()
            .context("SERVER_BODY_LIMIT is invalid")?,
        timeout: required("SERVER_TIMEOUT")?
            .parse::<u64>()
            .context("SERVER_TIMEOUT is invalid")?,
    };

    let database = Database {
        url: required("DATABASE_URL")?,
        max_pool_size: optional("DATABASE_MAX_POOL_SIZE")
            .map(|raw| raw.parse::<u32>())
            .transpose()
            .context("DATABASE_MAX_POOL_SIZE is invalid")?
            .unwrap_or(DEFAULT_MAX_POOL_SIZE),
    };

    let redis = Redis {
        url: required("REDIS_URL")?,
    };

    let admin_secret = AdminSecret {
        secret: required("JWT_ADMIN_SECRET")?,
    };

    let shipping_rate = ShippingRate {
        base_url: Url::parse(&required("SHIPPING_RATE_BASE_URL")?)
            .context("SHIPPING_RATE_BASE_URL is invalid")?,
        api_key: required("SHIPPING_RATE_API_KEY")?,
        cache_ttl_seconds: optional("SHIPPING_COST_CACHE_TTL_SECONDS")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .context("SHIPPING_COST_CACHE_TTL_SECONDS is invalid")?
            .unwrap_or(DEFAULT_SHIPPING_COST_CACHE_TTL_SECONDS),
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
        redis,
        admin_secret,
        shipping_rate,
        stage: get_stage(),
        service_name: optional("SERVICE_NAME").unwrap_or_else(|| "backend".to_string()),
        log_level: optional("LOG_LEVEL"),
    })
}

pub fn get_stage() -> Stage {
    let stage_str = std::env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(&stage_str).unwrap_or_default()
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{} is invalid", key))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
