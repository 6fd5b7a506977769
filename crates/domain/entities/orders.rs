use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::orders;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = orders)]
pub struct OrderEntity {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub user_id: Uuid,
    pub courier_id: Uuid,
    pub voucher_marketplace_id: Option<Uuid>,
    pub voucher_shop_id: Option<Uuid>,
    pub status: String,
    /// Minor units, delivery fee included.
    pub total_price: i64,
    pub delivery_fee: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
