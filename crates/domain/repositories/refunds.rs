use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::refunds::RefundEntity, value_objects::refunds::ListRefundsFilter,
};

#[automock]
#[async_trait]
pub trait RefundRepository {
    async fn find_by_id(&self, refund_id: Uuid) -> Result<Option<RefundEntity>>;
    /// Sets `refunded_at` only while the refund is accepted, not rejected and
    /// not yet refunded. Returns `false` when no row matched.
    async fn mark_refunded(&self, refund_id: Uuid, refunded_at: DateTime<Utc>) -> Result<bool>;
    async fn list(&self, filter: &ListRefundsFilter) -> Result<Vec<RefundEntity>>;
}
