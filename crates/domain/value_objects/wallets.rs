use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::wallets::WalletEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletAdjustmentModel {
    /// `credit` or `debit`.
    pub direction: String,
    /// Minor units, must be positive.
    pub amount: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub balance: i64,
}

impl From<WalletEntity> for WalletDto {
    fn from(value: WalletEntity) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            balance: value.balance,
        }
    }
}
