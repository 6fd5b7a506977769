use anyhow::anyhow;
use chrono::Utc;
use crates::domain::{
    entities::{orders::OrderEntity, wallet_histories::InsertWalletHistoryEntity},
    repositories::{
        orders::OrderRepository, product_details::ProductDetailRepository,
        refunds::RefundRepository, wallets::WalletRepository,
    },
    value_objects::{
        enums::{
            order_statuses::OrderStatus, refund_statuses::RefundStatus,
            wallet_history_directions::WalletHistoryDirection,
        },
        refunds::{ListRefundsFilter, MAX_REFUND_LIST_LIMIT, RefundDto},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RefundError {
    #[error("refund not found")]
    RefundNotFound,
    #[error("refund is rejected or has not been accepted")]
    RefundRejected,
    #[error("refund has already been finished")]
    RefundAlreadyFinished,
    #[error("limit must be between 1 and {0}")]
    InvalidLimit(i64),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RefundError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            RefundError::RefundNotFound
            | RefundError::RefundRejected
            | RefundError::RefundAlreadyFinished
            | RefundError::InvalidLimit(_) => StatusCode::BAD_REQUEST,
            RefundError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, RefundError>;

pub struct RefundUseCase<R, O, P, W>
where
    R: RefundRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    P: ProductDetailRepository + Send + Sync + 'static,
    W: WalletRepository + Send + Sync + 'static,
{
    refund_repository: Arc<R>,
    order_repository: Arc<O>,
    product_detail_repository: Arc<P>,
    wallet_repository: Arc<W>,
}

impl<R, O, P, W> RefundUseCase<R, O, P, W>
where
    R: RefundRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    P: ProductDetailRepository + Send + Sync + 'static,
    W: WalletRepository + Send + Sync + 'static,
{
    pub fn new(
        refund_repository: Arc<R>,
        order_repository: Arc<O>,
        product_detail_repository: Arc<P>,
        wallet_repository: Arc<W>,
    ) -> Self {
        Self {
            refund_repository,
            order_repository,
            product_detail_repository,
            wallet_repository,
        }
    }

    /// Finalizes an accepted refund: restocks every ordered item, credits the
    /// buyer's wallet with the order total and writes the two ledger rows.
    ///
    /// Each step commits on its own. Writing `refunded_at` is conditional and
    /// happens before any side effect, so only one of several concurrent
    /// settlements proceeds. A failure part-way leaves the earlier steps
    /// applied and a retry is refused with `RefundAlreadyFinished`.
    pub async fn settle_refund(&self, refund_id: Uuid) -> UseCaseResult<()> {
        info!(%refund_id, "refunds: settlement requested");

        let refund = self
            .refund_repository
            .find_by_id(refund_id)
            .await
            .map_err(|err| {
                error!(%refund_id, db_error = ?err, "refunds: failed to load refund");
                RefundError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%refund_id, "refunds: refund not found");
                RefundError::RefundNotFound
            })?;

        match refund.status() {
            RefundStatus::Accepted => {}
            status @ (RefundStatus::Pending | RefundStatus::Rejected) => {
                warn!(%refund_id, refund_status = %status, "refunds: refund is not settleable");
                return Err(RefundError::RefundRejected);
            }
            RefundStatus::Refunded => {
                warn!(%refund_id, "refunds: refund already finished");
                return Err(RefundError::RefundAlreadyFinished);
            }
        }

        let order = self
            .order_repository
            .find_by_id(refund.order_id)
            .await
            .map_err(|err| {
                error!(
                    %refund_id,
                    order_id = %refund.order_id,
                    db_error = ?err,
                    "refunds: failed to load order"
                );
                RefundError::Internal(err)
            })?;

        let claimed = self
            .refund_repository
            .mark_refunded(refund.id, Utc::now())
            .await
            .map_err(|err| {
                error!(%refund_id, db_error = ?err, "refunds: failed to mark refund as refunded");
                RefundError::Internal(err)
            })?;

        // Another settlement of the same refund got there first.
        if !claimed {
            warn!(%refund_id, "refunds: refund was settled concurrently");
            return Err(RefundError::RefundAlreadyFinished);
        }

        self.order_repository
            .update_status(order.id, OrderStatus::Refunded)
            .await
            .map_err(|err| {
                error!(
                    %refund_id,
                    order_id = %order.id,
                    db_error = ?err,
                    "refunds: failed to update order status"
                );
                RefundError::Internal(err)
            })?;

        let items = self
            .order_repository
            .list_items(order.id)
            .await
            .map_err(|err| {
                error!(
                    %refund_id,
                    order_id = %order.id,
                    db_error = ?err,
                    "refunds: failed to load order items"
                );
                RefundError::Internal(err)
            })?;

        for item in &items {
            let product_detail = self
                .product_detail_repository
                .find_by_id(item.product_detail_id)
                .await
                .map_err(|err| {
                    error!(
                        %refund_id,
                        product_detail_id = %item.product_detail_id,
                        db_error = ?err,
                        "refunds: failed to load product detail"
                    );
                    RefundError::Internal(err)
                })?;

            let stock = self
                .product_detail_repository
                .increase_stock(product_detail.id, item.quantity)
                .await
                .map_err(|err| {
                    error!(
                        %refund_id,
                        product_detail_id = %product_detail.id,
                        quantity = item.quantity,
                        db_error = ?err,
                        "refunds: failed to restock product detail"
                    );
                    RefundError::Internal(err)
                })?;

            debug!(
                product_detail_id = %product_detail.id,
                previous_stock = product_detail.stock,
                stock,
                quantity = item.quantity,
                "refunds: product detail restocked"
            );
        }

        let wallet = self
            .wallet_repository
            .find_by_user_id(order.user_id)
            .await
            .map_err(|err| {
                error!(
                    %refund_id,
                    user_id = %order.user_id,
                    db_error = ?err,
                    "refunds: failed to load buyer wallet"
                );
                RefundError::Internal(err)
            })?
            .ok_or_else(|| {
                error!(%refund_id, user_id = %order.user_id, "refunds: buyer has no wallet");
                RefundError::Internal(anyhow!("wallet not found for user {}", order.user_id))
            })?;

        let balance = self
            .wallet_repository
            .credit_balance(wallet.id, order.total_price)
            .await
            .map_err(|err| {
                error!(
                    %refund_id,
                    wallet_id = %wallet.id,
                    amount = order.total_price,
                    db_error = ?err,
                    "refunds: failed to credit buyer wallet"
                );
                RefundError::Internal(err)
            })?;

        for history in settlement_ledger_entries(wallet.id, &order) {
            let direction = history.direction.clone();
            self.wallet_repository
                .insert_history(history)
                .await
                .map_err(|err| {
                    error!(
                        %refund_id,
                        wallet_id = %wallet.id,
                        %direction,
                        db_error = ?err,
                        "refunds: failed to write wallet history"
                    );
                    RefundError::Internal(err)
                })?;
        }

        info!(
            %refund_id,
            order_id = %order.id,
            restocked_items = items.len(),
            wallet_balance = balance,
            "refunds: settlement completed"
        );

        Ok(())
    }

    pub async fn list_refunds(&self, filter: ListRefundsFilter) -> UseCaseResult<Vec<RefundDto>> {
        if filter.limit <= 0 || filter.limit > MAX_REFUND_LIST_LIMIT {
            warn!(limit = filter.limit, "refunds: invalid list limit");
            return Err(RefundError::InvalidLimit(MAX_REFUND_LIST_LIMIT));
        }

        let refunds = self.refund_repository.list(&filter).await.map_err(|err| {
            error!(db_error = ?err, "refunds: failed to list refunds");
            RefundError::Internal(err)
        })?;

        debug!(refund_count = refunds.len(), "refunds: refunds listed");
        Ok(refunds.into_iter().map(RefundDto::from).collect())
    }
}

/// The voided order payment and the wallet credit are recorded as separate
/// rows; only the credit moves the balance.
fn settlement_ledger_entries(
    wallet_id: Uuid,
    order: &OrderEntity,
) -> [InsertWalletHistoryEntity; 2] {
    [
        InsertWalletHistoryEntity {
            wallet_id,
            direction: WalletHistoryDirection::Reversal.to_string(),
            amount: order.total_price,
            description: format!("Payment reversal for order {}", order.id),
        },
        InsertWalletHistoryEntity {
            wallet_id,
            direction: WalletHistoryDirection::Credit.to_string(),
            amount: order.total_price,
            description: format!("Refund for order {}", order.id),
        },
    ]
}
