use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::product_details;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = product_details)]
pub struct ProductDetailEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub price: i64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
