use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use crates::{
    domain::{
        repositories::shipping_costs::ShippingCostCacheRepository,
        value_objects::{
            enums::couriers::Courier,
            shipping_costs::{ShippingCostOption, ShippingCostQuery, shipping_cost_cache_key},
        },
    },
    infra::shipping::rate_client::ShippingRateClient,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShippingRateGateway: Send + Sync {
    async fn fetch_costs(
        &self,
        origin: &str,
        destination: &str,
        weight: i32,
        courier: Courier,
    ) -> AnyResult<Vec<ShippingCostOption>>;
}

#[async_trait]
impl ShippingRateGateway for ShippingRateClient {
    async fn fetch_costs(
        &self,
        origin: &str,
        destination: &str,
        weight: i32,
        courier: Courier,
    ) -> AnyResult<Vec<ShippingCostOption>> {
        self.fetch_costs(origin, destination, weight, courier).await
    }
}

#[derive(Debug, Error)]
pub enum ShippingCostError {
    #[error("weight must be greater than zero")]
    InvalidWeight,
    #[error("origin and destination must be numeric city ids")]
    InvalidLocation,
    #[error("courier must be one of jne, pos, tiki")]
    UnsupportedCourier,
    #[error("shipping rate provider is unavailable")]
    RateProviderUnavailable(#[source] anyhow::Error),
}

impl ShippingCostError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ShippingCostError::InvalidWeight
            | ShippingCostError::InvalidLocation
            | ShippingCostError::UnsupportedCourier => StatusCode::BAD_REQUEST,
            ShippingCostError::RateProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, ShippingCostError>;

pub struct ShippingCostUseCase<C, G>
where
    C: ShippingCostCacheRepository + Send + Sync + 'static,
    G: ShippingRateGateway + 'static,
{
    cache_repository: Arc<C>,
    rate_gateway: Arc<G>,
    cache_ttl_seconds: u64,
}

impl<C, G> ShippingCostUseCase<C, G>
where
    C: ShippingCostCacheRepository + Send + Sync + 'static,
    G: ShippingRateGateway + 'static,
{
    pub fn new(cache_repository: Arc<C>, rate_gateway: Arc<G>, cache_ttl_seconds: u64) -> Self {
        Self {
            cache_repository,
            rate_gateway,
            cache_ttl_seconds,
        }
    }

    /// Cache-aside lookup. The cache is best effort: read, decode and write
    /// failures are logged and never fail the request.
    pub async fn get_shipping_costs(
        &self,
        query: ShippingCostQuery,
    ) -> UseCaseResult<Vec<ShippingCostOption>> {
        if query.weight <= 0 {
            warn!(weight = query.weight, "shipping_costs: invalid weight");
            return Err(ShippingCostError::InvalidWeight);
        }

        let origin = query.origin.trim();
        let destination = query.destination.trim();
        if !is_city_id(origin) || !is_city_id(destination) {
            warn!(origin, destination, "shipping_costs: invalid origin or destination");
            return Err(ShippingCostError::InvalidLocation);
        }

        let courier = Courier::from_str(&query.courier).ok_or_else(|| {
            warn!(courier = %query.courier, "shipping_costs: unsupported courier");
            ShippingCostError::UnsupportedCourier
        })?;

        let cache_key = shipping_cost_cache_key(origin, destination, query.weight, courier);

        match self.cache_repository.get(&cache_key).await {
            Ok(Some(cached)) => match serde_json::from_str::<Vec<ShippingCostOption>>(&cached) {
                Ok(costs) => {
                    debug!(%cache_key, "shipping_costs: cache hit");
                    return Ok(costs);
                }
                Err(err) => {
                    warn!(%cache_key, error = ?err, "shipping_costs: cached value is unreadable");
                }
            },
            Ok(None) => debug!(%cache_key, "shipping_costs: cache miss"),
            Err(err) => {
                warn!(%cache_key, cache_error = ?err, "shipping_costs: cache read failed");
            }
        }

        let costs = self
            .rate_gateway
            .fetch_costs(origin, destination, query.weight, courier)
            .await
            .map_err(|err| {
                error!(
                    origin,
                    destination,
                    %courier,
                    provider_error = ?err,
                    "shipping_costs: rate provider request failed"
                );
                ShippingCostError::RateProviderUnavailable(err)
            })?;

        match serde_json::to_string(&costs) {
            Ok(encoded) => {
                if let Err(err) = self
                    .cache_repository
                    .set(&cache_key, encoded, self.cache_ttl_seconds)
                    .await
                {
                    warn!(%cache_key, cache_error = ?err, "shipping_costs: cache write failed");
                }
            }
            Err(err) => {
                warn!(%cache_key, error = ?err, "shipping_costs: failed to encode costs for cache");
            }
        }

        info!(
            %cache_key,
            option_count = costs.len(),
            "shipping_costs: costs fetched from provider"
        );

        Ok(costs)
    }
}

/// Provider city ids are numeric; anything else could collide inside the
/// `:`-separated cache key.
fn is_city_id(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use crates::domain::repositories::shipping_costs::MockShippingCostCacheRepository;

    const TTL: u64 = 86_400;

    fn query(courier: &str) -> ShippingCostQuery {
        ShippingCostQuery {
            origin: "501".to_string(),
            destination: "114".to_string(),
            weight: 1_700,
            courier: courier.to_string(),
        }
    }

    fn options() -> Vec<ShippingCostOption> {
        vec![
            ShippingCostOption {
                courier: Courier::Jne,
                service: "OKE".to_string(),
                description: "Ongkos Kirim Ekonomis".to_string(),
                cost: 38_000,
                etd: "4-5".to_string(),
            },
            ShippingCostOption {
                courier: Courier::Jne,
                service: "REG".to_string(),
                description: "Layanan Reguler".to_string(),
                cost: 44_000,
                etd: "2-3".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn cache_hit_skips_provider() {
        let mut cache = MockShippingCostCacheRepository::new();
        let cached = serde_json::to_string(&options()).unwrap();
        cache
            .expect_get()
            .withf(|key| key.to_string() == "shipping_cost:501:114:1700:jne")
            .times(1)
            .returning(move |_| Ok(Some(cached.clone())));
        cache.expect_set().never();

        let mut gateway = MockShippingRateGateway::new();
        gateway.expect_fetch_costs().never();

        let usecase = ShippingCostUseCase::new(Arc::new(cache), Arc::new(gateway), TTL);
        let costs = usecase.get_shipping_costs(query("JNE")).await.unwrap();

        assert_eq!(costs, options());
    }

    #[tokio::test]
    async fn cache_miss_fetches_and_stores_with_ttl() {
        let mut cache = MockShippingCostCacheRepository::new();
        cache.expect_get().times(1).returning(|_| Ok(None));
        cache
            .expect_set()
            .withf(|key, value, ttl| {
                key.to_string() == "shipping_cost:501:114:1700:jne"
                    && *ttl == TTL
                    && serde_json::from_str::<Vec<ShippingCostOption>>(value)
                        .map(|stored| stored == options())
                        .unwrap_or(false)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut gateway = MockShippingRateGateway::new();
        gateway
            .expect_fetch_costs()
            .withf(|origin, destination, weight, courier| {
                origin.to_string() == "501"
                    && destination.to_string() == "114"
                    && *weight == 1_700 && *courier == Courier::Jne
            })
            .times(1)
            .returning(|_, _, _, _| Ok(options()));

        let usecase = ShippingCostUseCase::new(Arc::new(cache), Arc::new(gateway), TTL);
        let costs = usecase.get_shipping_costs(query("jne")).await.unwrap();

        assert_eq!(costs.len(), 2);
    }

    #[tokio::test]
    async fn cache_failures_fall_back_to_provider() {
        let mut cache = MockShippingCostCacheRepository::new();
        cache
            .expect_get()
            .returning(|_| Err(anyhow!("connection reset by peer")));
        cache
            .expect_set()
            .times(1)
            .returning(|_, _, _| Err(anyhow!("connection reset by peer")));

        let mut gateway = MockShippingRateGateway::new();
        gateway
            .expect_fetch_costs()
            .times(1)
            .returning(|_, _, _, _| Ok(options()));

        let usecase = ShippingCostUseCase::new(Arc::new(cache), Arc::new(gateway), TTL);
        let costs = usecase.get_shipping_costs(query("jne")).await.unwrap();

        assert_eq!(costs, options());
    }

    #[tokio::test]
    async fn corrupt_cache_entry_is_treated_as_miss() {
        let mut cache = MockShippingCostCacheRepository::new();
        cache
            .expect_get()
            .returning(|_| Ok(Some("{not json".to_string())));
        cache.expect_set().times(1).returning(|_, _, _| Ok(()));

        let mut gateway = MockShippingRateGateway::new();
        gateway
            .expect_fetch_costs()
            .times(1)
            .returning(|_, _, _, _| Ok(options()));

        let usecase = ShippingCostUseCase::new(Arc::new(cache), Arc::new(gateway), TTL);
        assert!(usecase.get_shipping_costs(query("jne")).await.is_ok());
    }

    #[tokio::test]
    async fn provider_failure_is_bad_gateway_and_not_cached() {
        let mut cache = MockShippingCostCacheRepository::new();
        cache.expect_get().returning(|_| Ok(None));
        cache.expect_set().never();

        let mut gateway = MockShippingRateGateway::new();
        gateway
            .expect_fetch_costs()
            .returning(|_, _, _, _| Err(anyhow!("operation timed out")));

        let usecase = ShippingCostUseCase::new(Arc::new(cache), Arc::new(gateway), TTL);
        let err = usecase.get_shipping_costs(query("tiki")).await.unwrap_err();

        assert!(matches!(err, ShippingCostError::RateProviderUnavailable(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn invalid_queries_never_touch_cache_or_provider() {
        let usecase = ShippingCostUseCase::new(
            Arc::new(MockShippingCostCacheRepository::new()),
            Arc::new(MockShippingRateGateway::new()),
            TTL,
        );

        let mut zero_weight = query("jne");
        zero_weight.weight = 0;
        assert!(matches!(
            usecase.get_shipping_costs(zero_weight).await,
            Err(ShippingCostError::InvalidWeight)
        ));

        let mut blank_origin = query("jne");
        blank_origin.origin = "  ".to_string();
        assert!(matches!(
            usecase.get_shipping_costs(blank_origin).await,
            Err(ShippingCostError::InvalidLocation)
        ));

        let mut separator_in_origin = query("jne");
        separator_in_origin.origin = "501:114".to_string();
        assert!(matches!(
            usecase.get_shipping_costs(separator_in_origin).await,
            Err(ShippingCostError::InvalidLocation)
        ));

        assert!(matches!(
            usecase.get_shipping_costs(query("sicepat")).await,
            Err(ShippingCostError::UnsupportedCourier)
        ));
    }

    #[tokio::test]
    async fn routes_sharing_a_separator_cannot_share_a_cache_entry() {
        let mut cache = MockShippingCostCacheRepository::new();
        cache.expect_get().never();
        cache.expect_set().never();

        let mut gateway = MockShippingRateGateway::new();
        gateway.expect_fetch_costs().never();

        let usecase = ShippingCostUseCase::new(Arc::new(cache), Arc::new(gateway), TTL);

        for (origin, destination) in [("a:b", "c"), ("a", "b:c"), ("501", "11 4")] {
            let query = ShippingCostQuery {
                origin: origin.to_string(),
                destination: destination.to_string(),
                weight: 1_000,
                courier: "jne".to_string(),
            };
            assert!(matches!(
                usecase.get_shipping_costs(query).await,
                Err(ShippingCostError::InvalidLocation)
            ));
        }
    }

    #[test]
    fn city_ids_are_digits_only() {
        assert!(is_city_id("501"));
        assert!(!is_city_id(""));
        assert!(!is_city_id("a:b"));
        assert!(!is_city_id("-1"));
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        assert_eq!(
            ShippingCostError::UnsupportedCourier.status_code(),
            axum::http::StatusCode::BAD_REQUEST
        );
    }
}
