use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::wallets;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = wallets)]
pub struct WalletEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
