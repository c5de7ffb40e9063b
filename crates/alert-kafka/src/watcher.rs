//! Alert topic consumer.
//!
//! Subscribes to the alert topic in the user's consumer group and logs every
//! alert it can decode. Payloads that aren't alerts are logged and skipped,
//! and so are consumer errors unless they leave the client unusable.

use async_trait::async_trait;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::message::Message;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::KafkaConfig;
use crate::error::{Error, Result};
use crate::publisher::decode_alert;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub received: u64,
    pub undecodable: u64,
    /// Consumer errors that were logged and skipped.
    pub consumer_errors: u64,
}

/// One record read from the alert topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedMessage {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub payload: Option<Vec<u8>>,
}

/// Where the watcher reads records from.
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn next_message(&self) -> std::result::Result<WatchedMessage, KafkaError>;
}

#[async_trait]
impl MessageSource for StreamConsumer {
    async fn next_message(&self) -> std::result::Result<WatchedMessage, KafkaError> {
        let message = self.recv().await?;
        Ok(WatchedMessage {
            topic: message.topic().to_string(),
            partition: message.partition(),
            offset: message.offset(),
            payload: message.payload().map(<[u8]>::to_vec),
        })
    }
}

/// Whether a consumer error leaves the client unusable.
fn is_fatal(err: &KafkaError) -> bool {
    matches!(err, KafkaError::ClientCreation(_) | KafkaError::Subscription(_))
        || err.rdkafka_error_code() == Some(RDKafkaErrorCode::Fatal)
}

pub struct AlertWatcher<S = StreamConsumer> {
    source: S,
    topic: String,
}

impl AlertWatcher<StreamConsumer> {
    pub fn new(config: &KafkaConfig) -> Result<Self> {
        let consumer: StreamConsumer = config.consumer_config()?.create()?;
        let topic = config.topic();
        consumer.subscribe(&[topic.as_str()])?;
        info!("Subscribed to '{topic}' as group '{}'", config.group_id());
        Ok(Self::with_source(consumer, topic))
    }
}

impl<S: MessageSource> AlertWatcher<S> {
    pub fn with_source(source: S, topic: impl Into<String>) -> Self {
        Self {
            source,
            topic: topic.into(),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Consume until cancelled or until `limit` messages have been received.
    pub async fn run(
        &self,
        cancel: CancellationToken,
        limit: Option<u64>,
    ) -> Result<WatchSummary> {
        let mut summary = WatchSummary::default();

        while limit.map_or(true, |limit| summary.received < limit) {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                next = self.source.next_message() => next,
            };
            match next {
                Ok(message) => self.handle(&message, &mut summary),
                Err(e) if is_fatal(&e) => return Err(Error::Kafka(e)),
                Err(e) => {
                    warn!("Consumer error on '{}', continuing: {e}", self.topic);
                    summary.consumer_errors += 1;
                }
            }
        }

        info!(
            "Watcher stopped after {} messages ({} undecodable, {} consumer errors)",
            summary.received, summary.undecodable, summary.consumer_errors
        );
        Ok(summary)
    }

    /// Log one record and update the counters.
    fn handle(&self, message: &WatchedMessage, summary: &mut WatchSummary) {
        summary.received += 1;

        let Some(payload) = message.payload.as_deref() else {
            warn!(
                "Empty message at {} [{}] @ {}",
                message.topic, message.partition, message.offset
            );
            summary.undecodable += 1;
            return;
        };

        match decode_alert(payload) {
            Ok(alert) => info!(
                topic = %message.topic,
                partition = message.partition,
                offset = message.offset,
                "{} from {} at {} ({}, urgency {})",
                alert.event,
                alert.source,
                alert.date.format(alert_generator::DATE_FORMAT),
                alert.name,
                alert.urgency
            ),
            Err(e) => {
                warn!(
                    "Skipping undecodable message at {} [{}] @ {}: {e}",
                    message.topic, message.partition, message.offset
                );
                summary.undecodable += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publisher::encode_alert;
    use alert_generator::{AlertMessage, EventKind, SourceKind};
    use chrono::{TimeZone, Utc};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    type Step = std::result::Result<Option<Vec<u8>>, KafkaError>;

    /// Replays scripted steps, then keeps returning valid alerts.
    struct ScriptedSource {
        steps: Mutex<VecDeque<Step>>,
        offset: Mutex<i64>,
    }

    impl ScriptedSource {
        fn new(steps: impl IntoIterator<Item = Step>) -> Self {
            Self {
                steps: Mutex::new(steps.into_iter().collect()),
                offset: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl MessageSource for ScriptedSource {
        async fn next_message(&self) -> std::result::Result<WatchedMessage, KafkaError> {
            let step = self
                .steps
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Some(alert_payload())));
            let payload = step?;
            let mut offset = self.offset.lock().unwrap();
            *offset += 1;
            Ok(WatchedMessage {
                topic: "astro-space".to_string(),
                partition: 0,
                offset: *offset,
                payload,
            })
        }
    }

    fn alert_payload() -> Vec<u8> {
        encode_alert(&AlertMessage {
            event: EventKind::Comet,
            source: SourceKind::Keck,
            date: Utc.with_ymd_and_hms(2023, 8, 6, 12, 12, 44).unwrap(),
            ra: "22:10:00.10".to_string(),
            dec: "-28:17:33.00".to_string(),
            name: "A5V".to_string(),
            urgency: 3,
        })
        .unwrap()
    }

    fn watcher(steps: impl IntoIterator<Item = Step>) -> AlertWatcher<ScriptedSource> {
        AlertWatcher::with_source(ScriptedSource::new(steps), "astro-space")
    }

    #[tokio::test]
    async fn test_empty_payload_is_skipped() {
        let summary = watcher([Ok(None)])
            .run(CancellationToken::new(), Some(2))
            .await
            .unwrap();
        assert_eq!(summary.received, 2);
        assert_eq!(summary.undecodable, 1);
    }

    #[tokio::test]
    async fn test_non_alert_payload_is_skipped() {
        let summary = watcher([
            Ok(Some(b"not json".to_vec())),
            Ok(Some(br#"{"event":"Supernova"}"#.to_vec())),
        ])
        .run(CancellationToken::new(), Some(3))
        .await
        .unwrap();
        assert_eq!(summary.received, 3);
        assert_eq!(summary.undecodable, 2);
    }

    #[tokio::test]
    async fn test_stops_at_limit() {
        let summary = watcher([])
            .run(CancellationToken::new(), Some(5))
            .await
            .unwrap();
        assert_eq!(
            summary,
            WatchSummary {
                received: 5,
                undecodable: 0,
                consumer_errors: 0
            }
        );
    }

    #[tokio::test]
    async fn test_transient_consumer_error_is_skipped() {
        let summary = watcher([Err(KafkaError::MessageConsumption(
            RDKafkaErrorCode::UnknownTopicOrPartition,
        ))])
        .run(CancellationToken::new(), Some(1))
        .await
        .unwrap();
        assert_eq!(summary.consumer_errors, 1);
        assert_eq!(summary.received, 1);
        assert_eq!(summary.undecodable, 0);
    }

    #[tokio::test]
    async fn test_fatal_consumer_error_stops_watcher() {
        let result = watcher([Err(KafkaError::MessageConsumption(RDKafkaErrorCode::Fatal))])
            .run(CancellationToken::new(), Some(1))
            .await;
        assert!(matches!(result, Err(Error::Kafka(_))));
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let summary = watcher([]).run(cancel, None).await.unwrap();
        assert_eq!(summary, WatchSummary::default());
    }
}
