//! Bright Star Catalogue storage for star-alerts
//!
//! The catalog is a JSON array of star objects. [`CatalogLoader`] copies each
//! object verbatim into a single hash of a [`KeyValueStore`], keyed by the
//! star's Harvard reference number. [`StarCatalog`] reads entries back out.
//!
//! ## Storage Backends
//!
//! - `RedisStore` - Redis hash (`HSET`/`HGET`)
//! - `MemoryStore` - in-process map, used by tests and dry runs

mod error;
mod loader;
mod memory;
mod reader;
mod record;
mod redis_store;
pub mod store;

pub use error::{CatalogError, Result};
pub use loader::{CatalogLoader, LoadSummary};
pub use memory::MemoryStore;
pub use reader::StarCatalog;
pub use record::{reference_key, StarRecord, REFERENCE_FIELD};
pub use redis_store::{RedisStore, DEFAULT_REDIS_URL};
pub use store::KeyValueStore;

/// Hash name the catalog is stored under.
pub const DEFAULT_COLLECTION: &str = "BSC";

/// Number of entries in the bundled Bright Star Catalogue.
pub const BSC_SIZE: u32 = 9096;
