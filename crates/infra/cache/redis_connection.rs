use anyhow::Result;
use redis::{Client, aio::MultiplexedConnection};

/// Shared handle to the key-value store. Cloning is cheap; every clone
/// multiplexes over the same underlying connection.
#[derive(Clone)]
pub struct RedisSquad {
    connection: MultiplexedConnection,
}

impl RedisSquad {
    pub fn connection(&self) -> MultiplexedConnection {
        self.connection.clone()
    }
}

pub async fn establish_connection(redis_url: &str) -> Result<RedisSquad> {
    let client = Client::open(redis_url)?;
    let connection = client.get_multiplexed_async_connection().await?;
    Ok(RedisSquad { connection })
}
