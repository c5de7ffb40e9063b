use std::sync::Arc;

use alert_kafka::{AlertPublisher, KafkaAlertPublisher, KafkaConfig};
use anyhow::Context;
use star_catalog::{KeyValueStore, RedisStore, StarCatalog};

use crate::config::StoreOpts;

/// Connections shared by every alert cycle.
///
/// Built once at startup; the Redis connection and Kafka producer live as
/// long as the context does.
#[derive(Clone)]
pub struct AlertContext {
    pub catalog: StarCatalog,
    pub publisher: Arc<dyn AlertPublisher>,
}

impl AlertContext {
    pub fn new(catalog: StarCatalog, publisher: Arc<dyn AlertPublisher>) -> Self {
        Self { catalog, publisher }
    }

    /// Connect to Redis and create the Kafka producer.
    pub async fn connect(store: &StoreOpts, kafka: &KafkaConfig) -> anyhow::Result<Self> {
        let redis = RedisStore::connect(&store.redis_url)
            .await
            .with_context(|| format!("Failed to connect to Redis at {}", store.redis_url))?;
        let redis: Arc<dyn KeyValueStore> = Arc::new(redis);
        let catalog = StarCatalog::new(redis, store.collection.clone());

        let publisher =
            KafkaAlertPublisher::new(kafka).context("Failed to create Kafka producer")?;

        Ok(Self::new(catalog, Arc::new(publisher)))
    }
}
