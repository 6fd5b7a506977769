use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::{order_items::OrderItemEntity, orders::OrderEntity},
    value_objects::enums::order_statuses::OrderStatus,
};

#[automock]
#[async_trait]
pub trait OrderRepository {
    async fn find_by_id(&self, order_id: Uuid) -> Result<OrderEntity>;
    async fn update_status(&self, order_id: Uuid, status: OrderStatus) -> Result<()>;
    async fn list_items(&self, order_id: Uuid) -> Result<Vec<OrderItemEntity>>;
}
