use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::product_details::ProductDetailEntity;

#[automock]
#[async_trait]
pub trait ProductDetailRepository {
    async fn find_by_id(&self, product_detail_id: Uuid) -> Result<ProductDetailEntity>;
    /// Adds `quantity` to the stored stock in a single statement and returns the new stock.
    async fn increase_stock(&self, product_detail_id: Uuid, quantity: i32) -> Result<i32>;
}
