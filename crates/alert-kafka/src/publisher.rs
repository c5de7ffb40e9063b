//! Alert publishing.

use alert_generator::AlertMessage;
use async_trait::async_trait;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use uuid::Uuid;

use crate::config::KafkaConfig;
use crate::error::{Error, Result};

/// Broker acknowledgement for one published alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub key: String,
}

/// Sink for generated alerts.
///
/// `publish` resolves once delivery has been confirmed or has failed; the
/// caller decides what to do with a failure.
#[async_trait]
pub trait AlertPublisher: Send + Sync {
    /// Topic this publisher writes to.
    fn topic(&self) -> &str;

    async fn publish(&self, alert: &AlertMessage) -> Result<DeliveryReport>;
}

/// Serialize an alert into its JSON payload.
pub fn encode_alert(alert: &AlertMessage) -> Result<Vec<u8>> {
    serde_json::to_vec(alert).map_err(Error::Encode)
}

/// Parse a JSON payload back into an alert.
pub fn decode_alert(payload: &[u8]) -> Result<AlertMessage> {
    serde_json::from_slice(payload).map_err(Error::Decode)
}

/// [`AlertPublisher`] backed by an rdkafka `FutureProducer`.
///
/// The producer is created once and reused for every alert.
pub struct KafkaAlertPublisher {
    producer: FutureProducer,
    topic: String,
}

impl KafkaAlertPublisher {
    pub fn new(config: &KafkaConfig) -> Result<Self> {
        let producer: FutureProducer = config.client_config()?.create()?;
        let topic = config.topic();
        tracing::info!("Kafka producer ready for topic '{topic}' on {}", config.broker);
        Ok(Self { producer, topic })
    }
}

#[async_trait]
impl AlertPublisher for KafkaAlertPublisher {
    fn topic(&self) -> &str {
        &self.topic
    }

    async fn publish(&self, alert: &AlertMessage) -> Result<DeliveryReport> {
        let payload = encode_alert(alert)?;
        let key = Uuid::new_v4().to_string();

        let record = FutureRecord::to(&self.topic)
            .key(key.as_str())
            .payload(&payload);

        // Timeout::Never only applies to enqueueing; the delivery wait itself
        // is bounded by librdkafka's message.timeout.ms default.
        let (partition, offset) = self
            .producer
            .send(record, Timeout::Never)
            .await
            .map_err(|(err, _)| Error::Kafka(err))?;

        Ok(DeliveryReport {
            topic: self.topic.clone(),
            partition,
            offset,
            key,
        })
    }
}
