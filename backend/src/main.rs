use anyhow::Result;
use backend::axum_http::http_serve;
use backend::config::config_loader;
use crates::infra::{cache::redis_connection, db::postgres::postgres_connection};
use crates::observability::{ObservabilityConfig, init_observability, parse_level};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {:#}", error);
        eprintln!("Backend exited with error: {:#}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let dotenvy_env = config_loader::load()?;

    let mut observability = ObservabilityConfig::new(
        &dotenvy_env.service_name,
        &dotenvy_env.stage.to_string(),
        "backend",
    );
    if let Some(level) = dotenvy_env.log_level.as_deref().and_then(parse_level) {
        observability = observability.with_default_level(level);
    }
    init_observability(&observability)?;
    info!("ENV has been loaded");

    let postgres_pool = postgres_connection::establish_connection(
        &dotenvy_env.database.url,
        dotenvy_env.database.max_pool_size,
    )?;
    info!("Postgres connection has been established");

    let redis = redis_connection::establish_connection(&dotenvy_env.redis.url).await?;
    info!("Redis connection has been established");

    http_serve::start(
        Arc::new(dotenvy_env),
        Arc::new(postgres_pool),
        Arc::new(redis),
    )
    .await?;

    Ok(())
}
