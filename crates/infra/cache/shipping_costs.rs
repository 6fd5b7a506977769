use anyhow::Result;
use async_trait::async_trait;
use redis::AsyncCommands;
use std::sync::Arc;

use crate::{
    domain::repositories::shipping_costs::ShippingCostCacheRepository,
    infra::cache::redis_connection::RedisSquad,
};

pub struct ShippingCostRedis {
    redis: Arc<RedisSquad>,
}

impl ShippingCostRedis {
    pub fn new(redis: Arc<RedisSquad>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl ShippingCostCacheRepository for ShippingCostRedis {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.redis.connection();

        let value: Option<String> = conn.get(key).await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        let mut conn = self.redis.connection();

        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl_seconds)
            .query_async(&mut conn)
            .await?;

        Ok(())
    }
}
