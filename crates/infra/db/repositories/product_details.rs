use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::product_details},
};
use domain::{
    entities::product_details::ProductDetailEntity,
    repositories::product_details::ProductDetailRepository,
};

pub struct ProductDetailPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ProductDetailPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProductDetailRepository for ProductDetailPostgres {
    async fn find_by_id(&self, product_detail_id: Uuid) -> Result<ProductDetailEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let product_detail = product_details::table
            .filter(product_details::id.eq(product_detail_id))
            .select(ProductDetailEntity::as_select())
            .first::<ProductDetailEntity>(&mut conn)?;

        Ok(product_detail)
    }

    async fn increase_stock(&self, product_detail_id: Uuid, quantity: i32) -> Result<i32> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let stock = update(product_details::table.filter(product_details::id.eq(product_detail_id)))
            .set((
                product_details::stock.eq(product_details::stock + quantity),
                product_details::updated_at.eq(Utc::now()),
            ))
            .returning(product_details::stock)
            .get_result::<i32>(&mut conn)?;

        Ok(stock)
    }
}
