use crate::{
    axum_http::error_responses::AppError,
    config::config_model::DotEnvyConfig,
    usecases::shipping_costs::{ShippingCostUseCase, ShippingRateGateway},
};
use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use crates::{
    domain::{
        repositories::shipping_costs::ShippingCostCacheRepository,
        value_objects::shipping_costs::ShippingCostQuery,
    },
    infra::{
        cache::{redis_connection::RedisSquad, shipping_costs::ShippingCostRedis},
        shipping::rate_client::ShippingRateClient,
    },
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;
use tracing::info;

pub fn routes(redis: Arc<RedisSquad>, config: Arc<DotEnvyConfig>) -> Result<Router> {
    let cache_repository = ShippingCostRedis::new(Arc::clone(&redis));
    let rate_client = ShippingRateClient::new(
        config.shipping_rate.base_url.clone(),
        config.shipping_rate.api_key.clone(),
    )?;

    let usecase = ShippingCostUseCase::new(
        Arc::new(cache_repository),
        Arc::new(rate_client),
        config.shipping_rate.cache_ttl_seconds,
    );

    Ok(router(Arc::new(usecase)))
}

pub fn router<C, G>(usecase: Arc<ShippingCostUseCase<C, G>>) -> Router
where
    C: ShippingCostCacheRepository + Send + Sync + 'static,
    G: ShippingRateGateway + 'static,
{
    Router::new()
        .route("/shipping-cost", get(shipping_cost::<C, G>))
        .with_state(usecase)
}

pub async fn shipping_cost<C, G>(
    State(usecase): State<Arc<ShippingCostUseCase<C, G>>>,
    WithRejection(Query(query), _): WithRejection<Query<ShippingCostQuery>, AppError>,
) -> Result<impl IntoResponse, AppError>
where
    C: ShippingCostCacheRepository + Send + Sync + 'static,
    G: ShippingRateGateway + 'static,
{
    info!(
        origin = %query.origin,
        destination = %query.destination,
        weight = query.weight,
        courier = %query.courier,
        "location: shipping cost request received"
    );

    let costs = usecase.get_shipping_costs(query).await?;

    Ok(Json(costs))
}
