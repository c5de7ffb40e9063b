//! Shared helpers for the alert loop tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alert_generator::AlertMessage;
use alert_kafka::{AlertPublisher, DeliveryReport, Error, Result};
use async_trait::async_trait;
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use star_catalog::{CatalogLoader, KeyValueStore, MemoryStore, StarCatalog};
use tokio::time::Instant;

pub const SAMPLE_CATALOG: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bsc_sample.json");

/// (ra, dec, name) of every star in the sample catalog.
pub const SAMPLE_TRIPLES: [(&str, &str, &str); 3] = [
    ("00:05:09.90", "+45:13:45.00", "A1Vn"),
    ("00:05:03.80", "-00:30:11.00", "gG9"),
    ("00:05:20.10", "-05:42:27.00", "K0V"),
];

/// Load the sample catalog into a fresh in-memory store.
pub async fn sample_catalog() -> (Arc<MemoryStore>, StarCatalog) {
    let store = Arc::new(MemoryStore::new());
    CatalogLoader::new(store.as_ref(), "BSC")
        .load_file(SAMPLE_CATALOG)
        .await
        .expect("sample catalog loads");
    let dyn_store: Arc<dyn KeyValueStore> = store.clone();
    (store, StarCatalog::new(dyn_store, "BSC"))
}

/// A publish attempt as seen by a test publisher.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub alert: AlertMessage,
    pub at: Instant,
}

/// Publisher that records every alert and fails the attempts whose
/// (zero-based) index is listed in `fail_on`.
#[derive(Default)]
pub struct RecordingPublisher {
    attempts: Mutex<Vec<Attempt>>,
    fail_on: Vec<usize>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(fail_on: impl IntoIterator<Item = usize>) -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail_on: fail_on.into_iter().collect(),
        }
    }

    pub fn always_failing(count: usize) -> Self {
        Self::failing_on(0..count)
    }

    pub fn attempts(&self) -> Vec<Attempt> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertPublisher for RecordingPublisher {
    fn topic(&self) -> &str {
        "test-space"
    }

    async fn publish(&self, alert: &AlertMessage) -> Result<DeliveryReport> {
        let index = {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(Attempt {
                alert: alert.clone(),
                at: Instant::now(),
            });
            attempts.len() - 1
        };

        if self.fail_on.contains(&index) {
            return Err(Error::Kafka(KafkaError::MessageProduction(
                RDKafkaErrorCode::BrokerTransportFailure,
            )));
        }

        Ok(DeliveryReport {
            topic: self.topic().to_string(),
            partition: 0,
            offset: index as i64,
            key: format!("key-{index}"),
        })
    }
}
