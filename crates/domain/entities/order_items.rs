use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::order_items;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = order_items)]
pub struct OrderItemEntity {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_detail_id: Uuid,
    pub quantity: i32,
    pub item_price: i64,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}
