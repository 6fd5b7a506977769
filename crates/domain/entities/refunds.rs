use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::enums::refund_statuses::RefundStatus,
    infra::db::postgres::schema::refunds,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = refunds)]
pub struct RefundEntity {
    pub id: Uuid,
    pub order_id: Uuid,
    pub is_seller_refund: bool,
    pub is_buyer_refund: bool,
    pub reason: String,
    pub image: Option<String>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub refunded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RefundEntity {
    pub fn status(&self) -> RefundStatus {
        RefundStatus::from_timestamps(self.accepted_at, self.rejected_at, self.refunded_at)
    }
}
