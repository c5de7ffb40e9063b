//! Key-value storage trait for the star catalog
//!
//! The catalog lives in one hash-style collection. Implementations only need
//! field-level set and get over string values.

use async_trait::async_trait;

use crate::error::Result;

/// Hash-map style store: `collection -> key -> value`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Set `key` to `value` inside `collection`, overwriting any prior value.
    async fn set(&self, collection: &str, key: &str, value: &str) -> Result<()>;

    /// Read `key` from `collection`.
    ///
    /// Returns None if the key doesn't exist.
    async fn get(&self, collection: &str, key: &str) -> Result<Option<String>>;
}
