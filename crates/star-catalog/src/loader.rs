//! One-shot catalog ingestion.

use std::path::Path;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::record::reference_key;
use crate::store::KeyValueStore;

/// Outcome of a catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of stars written to the store.
    pub records: usize,
    pub duration: Duration,
}

/// Copies a JSON star catalog into a [`KeyValueStore`] collection.
///
/// Every element is stored verbatim (re-serialized) under its Harvard
/// reference number. A failure part-way through leaves the keys already
/// written in place; re-running with the same file overwrites them with
/// identical content.
pub struct CatalogLoader<'a> {
    store: &'a dyn KeyValueStore,
    collection: String,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(store: &'a dyn KeyValueStore, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Read and load the catalog file at `path`.
    pub async fn load_file(&self, path: impl AsRef<Path>) -> Result<LoadSummary> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;
        info!("Loading catalog from {}", path.display());
        self.load_str(&contents).await
    }

    /// Load a catalog from its JSON text.
    pub async fn load_str(&self, json: &str) -> Result<LoadSummary> {
        let stars: Vec<Value> = serde_json::from_str(json).map_err(CatalogError::Malformed)?;
        self.load(&stars).await
    }

    /// Load already-parsed catalog elements.
    pub async fn load(&self, stars: &[Value]) -> Result<LoadSummary> {
        let start = Instant::now();

        for (index, star) in stars.iter().enumerate() {
            let key = reference_key(index, star)?;
            let value = star.to_string();
            self.store.set(&self.collection, &key, &value).await?;
            debug!("Stored star {key}");
        }

        let summary = LoadSummary {
            records: stars.len(),
            duration: start.elapsed(),
        };
        info!(
            "Loaded {} stars into '{}' in {:?}",
            summary.records, self.collection, summary.duration
        );
        Ok(summary)
    }
}
