use std::sync::Arc;

use crate::error::{CatalogError, Result};
use crate::record::StarRecord;
use crate::store::KeyValueStore;

/// Read-only view of a loaded catalog collection.
#[derive(Clone)]
pub struct StarCatalog {
    store: Arc<dyn KeyValueStore>,
    collection: String,
}

impl StarCatalog {
    pub fn new(store: Arc<dyn KeyValueStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Fetch and decode the star with reference number `id`.
    ///
    /// A missing key is an error: it means the catalog in the store does not
    /// match the id range being drawn from.
    pub async fn lookup(&self, id: u32) -> Result<StarRecord> {
        let key = id.to_string();
        let raw = self
            .store
            .get(&self.collection, &key)
            .await?
            .ok_or_else(|| CatalogError::NotFound {
                collection: self.collection.clone(),
                key: key.clone(),
            })?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::Decode { key, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[tokio::test]
    async fn test_lookup() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                "BSC",
                "5",
                r#"{"harvard_ref_#":5,"RA":"00:06:00.00","DEC":"+58:26:12.00","Title HD":"G5V"}"#,
            )
            .await
            .unwrap();
        store.set("BSC", "6", r#"{"RA":1}"#).await.unwrap();

        let catalog = StarCatalog::new(store, "BSC");
        let star = catalog.lookup(5).await.unwrap();
        assert_eq!(star.ra, "00:06:00.00");
        assert_eq!(star.dec, "+58:26:12.00");
        assert_eq!(star.title, "G5V");

        assert!(matches!(
            catalog.lookup(9).await.unwrap_err(),
            CatalogError::NotFound { .. }
        ));
        assert!(matches!(
            catalog.lookup(6).await.unwrap_err(),
            CatalogError::Decode { .. }
        ));
    }
}
