//! Kafka transport for star-alerts.
//!
//! - [`KafkaAlertPublisher`] writes alerts as JSON to `<username>-space`,
//!   one UUIDv4 key per message, and waits for the delivery report.
//! - [`AlertWatcher`] reads the same topic back and logs each decoded alert.
//!
//! Both are configured from [`KafkaConfig`], which carries the broker address
//! and SASL credentials.

pub mod config;
pub mod error;
pub mod publisher;
pub mod watcher;

pub use config::{group_for_user, topic_for_user, KafkaConfig};
pub use error::{Error, Result};
pub use publisher::{
    decode_alert, encode_alert, AlertPublisher, DeliveryReport, KafkaAlertPublisher,
};
pub use watcher::{AlertWatcher, MessageSource, WatchSummary, WatchedMessage};
