use std::sync::Arc;

use crates::domain::{
    entities::wallet_histories::InsertWalletHistoryEntity,
    repositories::wallets::WalletRepository,
    value_objects::{
        enums::wallet_history_directions::WalletHistoryDirection,
        wallets::{WalletAdjustmentModel, WalletDto},
    },
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum WalletAdjustmentError {
    #[error("amount must be greater than zero")]
    InvalidAmount,
    #[error("direction must be either credit or debit")]
    InvalidDirection,
    #[error("description is required")]
    MissingDescription,
    #[error("wallet not found")]
    WalletNotFound,
    #[error("insufficient wallet balance")]
    InsufficientBalance,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl WalletAdjustmentError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            WalletAdjustmentError::InvalidAmount
            | WalletAdjustmentError::InvalidDirection
            | WalletAdjustmentError::MissingDescription
            | WalletAdjustmentError::InsufficientBalance => StatusCode::BAD_REQUEST,
            WalletAdjustmentError::WalletNotFound => StatusCode::NOT_FOUND,
            WalletAdjustmentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, WalletAdjustmentError>;

pub struct WalletAdjustmentUseCase<W>
where
    W: WalletRepository + Send + Sync + 'static,
{
    wallet_repository: Arc<W>,
}

impl<W> WalletAdjustmentUseCase<W>
where
    W: WalletRepository + Send + Sync + 'static,
{
    pub fn new(wallet_repository: Arc<W>) -> Self {
        Self { wallet_repository }
    }

    pub async fn adjust_wallet(
        &self,
        admin_id: Uuid,
        user_id: Uuid,
        adjustment: WalletAdjustmentModel,
    ) -> UseCaseResult<WalletDto> {
        info!(%admin_id, %user_id, "wallet_adjustments: adjustment requested");

        if adjustment.amount <= 0 {
            warn!(%user_id, amount = adjustment.amount, "wallet_adjustments: invalid amount");
            return Err(WalletAdjustmentError::InvalidAmount);
        }

        let direction = match WalletHistoryDirection::from_str(&adjustment.direction) {
            Some(direction @ (WalletHistoryDirection::Credit | WalletHistoryDirection::Debit)) => {
                direction
            }
            _ => {
                warn!(
                    %user_id,
                    direction = %adjustment.direction,
                    "wallet_adjustments: invalid direction"
                );
                return Err(WalletAdjustmentError::InvalidDirection);
            }
        };

        let description = adjustment.description.trim();
        if description.is_empty() {
            warn!(%user_id, "wallet_adjustments: missing description");
            return Err(WalletAdjustmentError::MissingDescription);
        }

        let mut wallet = self
            .wallet_repository
            .find_by_user_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "wallet_adjustments: failed to load wallet");
                WalletAdjustmentError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, "wallet_adjustments: wallet not found");
                WalletAdjustmentError::WalletNotFound
            })?;

        let balance = match direction {
            WalletHistoryDirection::Debit => self
                .wallet_repository
                .debit_balance(wallet.id, adjustment.amount)
                .await
                .map_err(|err| {
                    error!(wallet_id = %wallet.id, db_error = ?err, "wallet_adjustments: failed to debit wallet");
                    WalletAdjustmentError::Internal(err)
                })?
                .ok_or_else(|| {
                    warn!(
                        wallet_id = %wallet.id,
                        balance = wallet.balance,
                        amount = adjustment.amount,
                        "wallet_adjustments: insufficient balance"
                    );
                    WalletAdjustmentError::InsufficientBalance
                })?,
            _ => self
                .wallet_repository
                .credit_balance(wallet.id, adjustment.amount)
                .await
                .map_err(|err| {
                    error!(wallet_id = %wallet.id, db_error = ?err, "wallet_adjustments: failed to credit wallet");
                    WalletAdjustmentError::Internal(err)
                })?,
        };

        self.wallet_repository
            .insert_history(InsertWalletHistoryEntity {
                wallet_id: wallet.id,
                direction: direction.to_string(),
                amount: adjustment.amount,
                description: description.to_string(),
            })
            .await
            .map_err(|err| {
                error!(wallet_id = %wallet.id, db_error = ?err, "wallet_adjustments: failed to write wallet history");
                WalletAdjustmentError::Internal(err)
            })?;

        info!(
            %admin_id,
            wallet_id = %wallet.id,
            %direction,
            amount = adjustment.amount,
            balance,
            "wallet_adjustments: adjustment applied"
        );

        wallet.balance = balance;
        Ok(WalletDto::from(wallet))
    }
}
