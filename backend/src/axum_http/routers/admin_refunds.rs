use crate::{
    auth::AdminUser,
    axum_http::error_responses::AppError,
    usecases::refunds::RefundUseCase,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use crates::{
    domain::{
        repositories::{
            orders::OrderRepository, product_details::ProductDetailRepository,
            refunds::RefundRepository, wallets::WalletRepository,
        },
        value_objects::{
            enums::{refund_statuses::RefundStatus, sort_order::SortOrder},
            refunds::{DEFAULT_REFUND_LIST_LIMIT, ListRefundsFilter},
        },
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{
            orders::OrderPostgres, product_details::ProductDetailPostgres,
            refunds::RefundPostgres, wallets::WalletPostgres,
        },
    },
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ListRefundsQuery {
    status: Option<String>,
    limit: Option<i64>,
    sort_order: Option<String>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let refund_repository = RefundPostgres::new(Arc::clone(&db_pool));
    let order_repository = OrderPostgres::new(Arc::clone(&db_pool));
    let product_detail_repository = ProductDetailPostgres::new(Arc::clone(&db_pool));
    let wallet_repository = WalletPostgres::new(Arc::clone(&db_pool));

    let usecase = RefundUseCase::new(
        Arc::new(refund_repository),
        Arc::new(order_repository),
        Arc::new(product_detail_repository),
        Arc::new(wallet_repository),
    );

    router(Arc::new(usecase))
}

pub fn router<R, O, P, W>(usecase: Arc<RefundUseCase<R, O, P, W>>) -> Router
where
    R: RefundRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    P: ProductDetailRepository + Send + Sync + 'static,
    W: WalletRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_refunds::<R, O, P, W>))
        .route("/:id", post(settle_refund::<R, O, P, W>))
        .with_state(usecase)
}

pub async fn settle_refund<R, O, P, W>(
    State(usecase): State<Arc<RefundUseCase<R, O, P, W>>>,
    AdminUser { admin_id, .. }: AdminUser,
    WithRejection(Path(refund_id), _): WithRejection<Path<Uuid>, AppError>,
) -> Result<StatusCode, AppError>
where
    R: RefundRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    P: ProductDetailRepository + Send + Sync + 'static,
    W: WalletRepository + Send + Sync + 'static,
{
    info!(%admin_id, %refund_id, "admin_refunds: settle request received");

    usecase.settle_refund(refund_id).await?;

    Ok(StatusCode::OK)
}

pub async fn list_refunds<R, O, P, W>(
    State(usecase): State<Arc<RefundUseCase<R, O, P, W>>>,
    AdminUser { admin_id, .. }: AdminUser,
    WithRejection(Query(query), _): WithRejection<Query<ListRefundsQuery>, AppError>,
) -> Result<impl IntoResponse, AppError>
where
    R: RefundRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    P: ProductDetailRepository + Send + Sync + 'static,
    W: WalletRepository + Send + Sync + 'static,
{
    info!(%admin_id, "admin_refunds: list request received");

    let status = match query.status.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(RefundStatus::from_str(raw).ok_or_else(|| {
            AppError::rejected(
                StatusCode::BAD_REQUEST,
                "status must be one of pending, accepted, rejected, refunded",
            )
        })?),
    };

    let sort_order = match query.sort_order.as_deref() {
        None | Some("") | Some("desc") => SortOrder::Desc,
        Some("asc") => SortOrder::Asc,
        Some(_) => {
            return Err(AppError::rejected(
                StatusCode::BAD_REQUEST,
                "sort_order must be asc or desc",
            ));
        }
    };

    let filter = ListRefundsFilter {
        status,
        sort_order,
        limit: query.limit.unwrap_or(DEFAULT_REFUND_LIST_LIMIT),
    };

    let refunds = usecase.list_refunds(filter).await?;

    Ok(Json(refunds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axum_http::routers::test_support::{
        admin_bearer, body_bytes, error_body, secret, token_with_role,
    };
    use axum::{
        Extension,
        body::Body,
        http::{Request, header::AUTHORIZATION},
    };
    use chrono::{Duration, Utc};
    use crates::domain::{
        entities::{orders::OrderEntity, refunds::RefundEntity, wallets::WalletEntity},
        repositories::{
            orders::MockOrderRepository, product_details::MockProductDetailRepository,
            refunds::MockRefundRepository, wallets::MockWalletRepository,
        },
        value_objects::refunds::RefundDto,
    };
    use tower::ServiceExt;

    fn app(
        refund_repo: MockRefundRepository,
        order_repo: MockOrderRepository,
        wallet_repo: MockWalletRepository,
    ) -> Router {
        let usecase = RefundUseCase::new(
            Arc::new(refund_repo),
            Arc::new(order_repo),
            Arc::new(MockProductDetailRepository::new()),
            Arc::new(wallet_repo),
        );
        router(Arc::new(usecase)).layer(Extension(secret()))
    }

    fn refund(
        order_id: Uuid,
        accepted: bool,
        refunded: bool,
    ) -> RefundEntity {
        let now = Utc::now();
        RefundEntity {
            id: Uuid::new_v4(),
            order_id,
            is_seller_refund: true,
            is_buyer_refund: false,
            reason: "wrong size".to_string(),
            image: Some("refunds/evidence.jpg".to_string()),
            accepted_at: accepted.then(|| now - Duration::hours(3)),
            rejected_at: None,
            refunded_at: refunded.then_some(now),
            created_at: now - Duration::days(1),
            updated_at: now,
        }
    }

    fn settle_request(refund_id: Uuid, authorization: Option<String>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(format!("/{}", refund_id));
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn settle_returns_ok_with_empty_body() {
        let order_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let refund = refund(order_id, true, false);
        let refund_id = refund.id;
        let now = Utc::now();

        let mut refund_repo = MockRefundRepository::new();
        refund_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(refund.clone())));
        refund_repo.expect_mark_refunded().times(1).returning(|_, _| Ok(true));

        let mut order_repo = MockOrderRepository::new();
        order_repo.expect_find_by_id().returning(move |id| {
            Ok(OrderEntity {
                id,
                shop_id: Uuid::new_v4(),
                user_id,
                courier_id: Uuid::new_v4(),
                voucher_marketplace_id: None,
                voucher_shop_id: None,
                status: "received".to_string(),
                total_price: 10_000,
                delivery_fee: 0,
                created_at: now,
                updated_at: now,
            })
        });
        order_repo.expect_update_status().times(1).returning(|_, _| Ok(()));
        order_repo.expect_list_items().returning(|_| Ok(vec![]));

        let mut wallet_repo = MockWalletRepository::new();
        wallet_repo.expect_find_by_user_id().returning(move |user_id| {
            Ok(Some(WalletEntity {
                id: Uuid::new_v4(),
                user_id,
                balance: 0,
                created_at: now,
                updated_at: now,
            }))
        });
        wallet_repo
            .expect_credit_balance()
            .times(1)
            .returning(|_, amount| Ok(amount));
        wallet_repo
            .expect_insert_history()
            .times(2)
            .returning(|_| Ok(Uuid::new_v4()));

        let response = app(refund_repo, order_repo, wallet_repo)
            .oneshot(settle_request(refund_id, Some(admin_bearer())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn settle_finished_refund_is_bad_request() {
        let refund = refund(Uuid::new_v4(), true, true);
        let refund_id = refund.id;

        let mut refund_repo = MockRefundRepository::new();
        refund_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(refund.clone())));

        let response = app(refund_repo, MockOrderRepository::new(), MockWalletRepository::new())
            .oneshot(settle_request(refund_id, Some(admin_bearer())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(body.code, 400);
        assert_eq!(body.message, "refund has already been finished");
    }

    #[tokio::test]
    async fn settle_rejects_malformed_id_with_json_error() {
        let response = app(
            MockRefundRepository::new(),
            MockOrderRepository::new(),
            MockWalletRepository::new(),
        )
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/not-a-uuid")
                .header(AUTHORIZATION, admin_bearer())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(response).await.code, 400);
    }

    #[tokio::test]
    async fn list_rejects_non_numeric_limit_with_json_error() {
        let response = app(
            MockRefundRepository::new(),
            MockOrderRepository::new(),
            MockWalletRepository::new(),
        )
        .oneshot(
            Request::builder()
                .uri("/?limit=ten")
                .header(AUTHORIZATION, admin_bearer())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(response).await.code, 400);
    }

    #[tokio::test]
    async fn settle_requires_bearer_token() {
        let response = app(
            MockRefundRepository::new(),
            MockOrderRepository::new(),
            MockWalletRepository::new(),
        )
        .oneshot(settle_request(Uuid::new_v4(), None))
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_body(response).await.code, 401);
    }

    #[tokio::test]
    async fn settle_forbids_non_admin_role() {
        let response = app(
            MockRefundRepository::new(),
            MockOrderRepository::new(),
            MockWalletRepository::new(),
        )
        .oneshot(settle_request(
            Uuid::new_v4(),
            Some(format!("Bearer {}", token_with_role("seller"))),
        ))
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn list_passes_filter_and_returns_refunds() {
        let refund = refund(Uuid::new_v4(), true, false);
        let refund_id = refund.id;

        let mut refund_repo = MockRefundRepository::new();
        refund_repo
            .expect_list()
            .withf(|filter| {
                filter.status == Some(RefundStatus::Accepted)
                    && filter.sort_order == SortOrder::Asc
                    && filter.limit == 5
            })
            .times(1)
            .returning(move |_| Ok(vec![refund.clone()]));

        let response = app(refund_repo, MockOrderRepository::new(), MockWalletRepository::new())
            .oneshot(
                Request::builder()
                    .uri("/?status=accepted&limit=5&sort_order=asc")
                    .header(AUTHORIZATION, admin_bearer())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let refunds: Vec<RefundDto> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(refunds.len(), 1);
        assert_eq!(refunds[0].id, refund_id);
        assert_eq!(refunds[0].status, RefundStatus::Accepted);
    }

    #[tokio::test]
    async fn list_rejects_unknown_status() {
        let response = app(
            MockRefundRepository::new(),
            MockOrderRepository::new(),
            MockWalletRepository::new(),
        )
        .oneshot(
            Request::builder()
                .uri("/?status=approved")
                .header(AUTHORIZATION, admin_bearer())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
