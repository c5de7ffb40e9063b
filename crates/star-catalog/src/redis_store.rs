use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::error::Result;
use crate::store::KeyValueStore;

pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";

/// Redis-backed [`KeyValueStore`]; collections map to Redis hashes.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Open a multiplexed connection to the Redis server at `url`.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        tracing::debug!("Connected to Redis at {url}");
        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set(&self, collection: &str, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.hset(collection, key, value).await?;
        Ok(())
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.hget(collection, key).await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires a Redis server on localhost:6379"]
    async fn test_redis_roundtrip() {
        let store = RedisStore::connect(DEFAULT_REDIS_URL).await.unwrap();
        store
            .set("star-catalog-test", "1", r#"{"RA":"x"}"#)
            .await
            .unwrap();
        let value = store.get("star-catalog-test", "1").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"RA":"x"}"#));
        assert_eq!(store.get("star-catalog-test", "nope").await.unwrap(), None);
    }
}
