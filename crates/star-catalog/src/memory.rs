use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::KeyValueStore;

/// In-process [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, HashMap::len)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn set(&self, collection: &str, key: &str, value: &str) -> Result<()> {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<String>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|fields| fields.get(key))
            .cloned())
    }
}
