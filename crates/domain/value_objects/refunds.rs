use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::refunds::RefundEntity,
    value_objects::enums::{refund_statuses::RefundStatus, sort_order::SortOrder},
};

pub const DEFAULT_REFUND_LIST_LIMIT: i64 = 20;
pub const MAX_REFUND_LIST_LIMIT: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRefundsFilter {
    pub status: Option<RefundStatus>,
    pub sort_order: SortOrder,
    pub limit: i64,
}

impl Default for ListRefundsFilter {
    fn default() -> Self {
        Self {
            status: None,
            sort_order: SortOrder::Desc,
            limit: DEFAULT_REFUND_LIST_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefundDto {
    pub id: Uuid,
    pub order_id: Uuid,
    pub is_seller_refund: bool,
    pub is_buyer_refund: bool,
    pub reason: String,
    pub image: Option<String>,
    pub status: RefundStatus,
    pub accepted_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub refunded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<RefundEntity> for RefundDto {
    fn from(value: RefundEntity) -> Self {
        let status = value.status();

        Self {
            id: value.id,
            order_id: value.order_id,
            is_seller_refund: value.is_seller_refund,
            is_buyer_refund: value.is_buyer_refund,
            reason: value.reason,
            image: value.image,
            status,
            accepted_at: value.accepted_at,
            rejected_at: value.rejected_at,
            refunded_at: value.refunded_at,
            created_at: value.created_at,
        }
    }
}
