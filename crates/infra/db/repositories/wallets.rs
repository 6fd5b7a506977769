use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{OptionalExtension, RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain,
    infra::db::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{wallet_histories, wallets},
    },
};
use domain::{
    entities::{wallet_histories::InsertWalletHistoryEntity, wallets::WalletEntity},
    repositories::wallets::WalletRepository,
};

pub struct WalletPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl WalletPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl WalletRepository for WalletPostgres {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<WalletEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let wallet = wallets::table
            .filter(wallets::user_id.eq(user_id))
            .select(WalletEntity::as_select())
            .first::<WalletEntity>(&mut conn)
            .optional()?;

        Ok(wallet)
    }

    async fn credit_balance(&self, wallet_id: Uuid, amount: i64) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let balance = update(wallets::table.filter(wallets::id.eq(wallet_id)))
            .set((
                wallets::balance.eq(wallets::balance + amount),
                wallets::updated_at.eq(Utc::now()),
            ))
            .returning(wallets::balance)
            .get_result::<i64>(&mut conn)?;

        Ok(balance)
    }

    async fn debit_balance(&self, wallet_id: Uuid, amount: i64) -> Result<Option<i64>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let balance = update(
            wallets::table
                .filter(wallets::id.eq(wallet_id))
                .filter(wallets::balance.ge(amount)),
        )
        .set((
            wallets::balance.eq(wallets::balance - amount),
            wallets::updated_at.eq(Utc::now()),
        ))
        .returning(wallets::balance)
        .get_result::<i64>(&mut conn)
        .optional()?;

        Ok(balance)
    }

    async fn insert_history(&self, history: InsertWalletHistoryEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let history_id = insert_into(wallet_histories::table)
            .values(&history)
            .returning(wallet_histories::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(history_id)
    }
}
