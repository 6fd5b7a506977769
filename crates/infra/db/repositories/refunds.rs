use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::{OptionalExtension, RunQueryDsl, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::refunds},
};
use domain::{
    entities::refunds::RefundEntity,
    repositories::refunds::RefundRepository,
    value_objects::{
        enums::{refund_statuses::RefundStatus, sort_order::SortOrder},
        refunds::ListRefundsFilter,
    },
};

pub struct RefundPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl RefundPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl RefundRepository for RefundPostgres {
    async fn find_by_id(&self, refund_id: Uuid) -> Result<Option<RefundEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let refund = refunds::table
            .filter(refunds::id.eq(refund_id))
            .select(RefundEntity::as_select())
            .first::<RefundEntity>(&mut conn)
            .optional()?;

        Ok(refund)
    }

    async fn mark_refunded(&self, refund_id: Uuid, refunded_at: DateTime<Utc>) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let updated = update(
            refunds::table
                .filter(refunds::id.eq(refund_id))
                .filter(refunds::accepted_at.is_not_null())
                .filter(refunds::rejected_at.is_null())
                .filter(refunds::refunded_at.is_null()),
        )
        .set((
            refunds::refunded_at.eq(Some(refunded_at)),
            refunds::updated_at.eq(refunded_at),
        ))
        .execute(&mut conn)?;

        Ok(updated == 1)
    }

    async fn list(&self, filter: &ListRefundsFilter) -> Result<Vec<RefundEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = refunds::table
            .select(RefundEntity::as_select())
            .into_boxed();

        // Mirrors RefundStatus::from_timestamps.
        query = match filter.status {
            None => query,
            Some(RefundStatus::Rejected) => query.filter(refunds::rejected_at.is_not_null()),
            Some(RefundStatus::Pending) => query
                .filter(refunds::rejected_at.is_null())
                .filter(refunds::accepted_at.is_null()),
            Some(RefundStatus::Accepted) => query
                .filter(refunds::rejected_at.is_null())
                .filter(refunds::accepted_at.is_not_null())
                .filter(refunds::refunded_at.is_null()),
            Some(RefundStatus::Refunded) => query
                .filter(refunds::rejected_at.is_null())
                .filter(refunds::accepted_at.is_not_null())
                .filter(refunds::refunded_at.is_not_null()),
        };

        query = match filter.sort_order {
            SortOrder::Asc => query.order(refunds::created_at.asc()),
            SortOrder::Desc => query.order(refunds::created_at.desc()),
        };

        let results = query.limit(filter.limit).load::<RefundEntity>(&mut conn)?;

        Ok(results)
    }
}
