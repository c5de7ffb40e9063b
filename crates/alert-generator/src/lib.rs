//! Synthetic astronomical alert generation.
//!
//! Each alert combines independent random choices (event kind, observing
//! facility, a timestamp in the recent past, urgency) with the coordinates
//! and designation of one star drawn uniformly from the catalog.
//!
//! # Architecture
//!
//! ```text
//!   StdRng ──┬── EventKind / SourceKind / urgency
//!            ├── TimeOffset ──► date = now - offset
//!            └── star id ∈ [1, catalog_size]
//!                      │
//!                      ▼
//!               StarCatalog::lookup ──► ra / dec / name
//!                      │
//!                      ▼
//!                AlertMessage
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let catalog = StarCatalog::new(store, "BSC");
//! let mut generator = AlertGenerator::new(catalog, 9096, Some(42));
//! let alert = generator.next_alert().await?;
//! println!("{}", serde_json::to_string(&alert)?);
//! ```

mod error;
mod generator;
mod kinds;
mod message;
mod offset;

pub use error::GenerateError;
pub use generator::AlertGenerator;
pub use kinds::{EventKind, SourceKind};
pub use message::{AlertMessage, DATE_FORMAT};
pub use offset::TimeOffset;

/// Inclusive urgency range.
pub const MIN_URGENCY: u8 = 1;
pub const MAX_URGENCY: u8 = 5;
