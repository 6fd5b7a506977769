use crate::{
    auth::AdminUser,
    axum_http::error_responses::AppError,
    usecases::wallet_adjustments::WalletAdjustmentUseCase,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::post,
};
use crates::{
    domain::{
        repositories::wallets::WalletRepository, value_objects::wallets::WalletAdjustmentModel,
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::wallets::WalletPostgres,
    },
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let wallet_repository = WalletPostgres::new(Arc::clone(&db_pool));
    let usecase = WalletAdjustmentUseCase::new(Arc::new(wallet_repository));

    router(Arc::new(usecase))
}

pub fn router<W>(usecase: Arc<WalletAdjustmentUseCase<W>>) -> Router
where
    W: WalletRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/:user_id/adjust", post(adjust_wallet::<W>))
        .with_state(usecase)
}

pub async fn adjust_wallet<W>(
    State(usecase): State<Arc<WalletAdjustmentUseCase<W>>>,
    AdminUser { admin_id, .. }: AdminUser,
    WithRejection(Path(user_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(adjustment), _): WithRejection<Json<WalletAdjustmentModel>, AppError>,
) -> Result<impl IntoResponse, AppError>
where
    W: WalletRepository + Send + Sync + 'static,
{
    info!(%admin_id, %user_id, "admin_wallets: adjust request received");

    let wallet = usecase.adjust_wallet(admin_id, user_id, adjustment).await?;

    Ok(Json(wallet))
}
