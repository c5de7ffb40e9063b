//! star-alerts
//!
//! Two programs over the Bright Star Catalogue:
//!
//! - **load-catalog** copies the catalog JSON into a Redis hash, one field per
//!   star keyed by its Harvard reference number.
//! - **generate** publishes a synthetic astronomical alert to Kafka every
//!   12 seconds, taking its coordinates from a random catalog star.
//!
//! A third command, **watch**, reads the alert topic back for inspection.
//!
//! # CLI Usage
//!
//! ```bash
//! # Load the catalog (once)
//! star-alerts load-catalog --catalog BSC.json
//!
//! # Publish alerts forever to <USERNAME>-space
//! BROKER=broker:9094 USERNAME=astro PASSWORD=... star-alerts generate
//!
//! # Follow the topic
//! star-alerts watch --max-messages 10
//! ```

pub mod alert_loop;
pub mod config;
pub mod context;
pub mod ticker;

pub use alert_loop::{AlertLoop, RunSummary};
pub use config::{GenerateOpts, LoadOpts, StoreOpts, WatchOpts};
pub use context::AlertContext;
pub use ticker::{IntervalTicker, Ticker};
