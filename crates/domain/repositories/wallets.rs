use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::{
    wallet_histories::InsertWalletHistoryEntity, wallets::WalletEntity,
};

#[automock]
#[async_trait]
pub trait WalletRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<WalletEntity>>;
    /// Returns the balance after the credit.
    async fn credit_balance(&self, wallet_id: Uuid, amount: i64) -> Result<i64>;
    /// Returns `None` when the balance does not cover `amount`; nothing is written then.
    async fn debit_balance(&self, wallet_id: Uuid, amount: i64) -> Result<Option<i64>>;
    async fn insert_history(&self, history: InsertWalletHistoryEntity) -> Result<Uuid>;
}
