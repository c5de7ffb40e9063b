//! Broker connection settings.

use clap::Args;
use rdkafka::ClientConfig;

use crate::error::{Error, Result};

/// Topic alerts for `username` are published to.
pub fn topic_for_user(username: &str) -> String {
    format!("{username}-space")
}

/// Consumer group used when watching the topic of `username`.
pub fn group_for_user(username: &str) -> String {
    format!("{username}-group")
}

/// Kafka connection configuration
#[derive(Args, Clone, Debug)]
pub struct KafkaConfig {
    /// Kafka bootstrap servers (comma-separated)
    #[arg(long, env = "BROKER")]
    pub broker: String,

    /// SASL username; also names the topic (`<username>-space`)
    #[arg(long, env = "USERNAME")]
    pub username: String,

    /// SASL password
    #[arg(long, env = "PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Security protocol (PLAINTEXT, SSL, SASL_PLAINTEXT, SASL_SSL)
    #[arg(long, default_value = "SASL_SSL")]
    pub security_protocol: String,

    /// SASL mechanism
    #[arg(long, default_value = "SCRAM-SHA-256")]
    pub sasl_mechanism: String,

    /// Consumer session timeout in milliseconds
    #[arg(long, default_value_t = 6000)]
    pub session_timeout_ms: u32,
}

impl KafkaConfig {
    /// Plaintext configuration for a local broker without authentication.
    pub fn plaintext(broker: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            broker: broker.into(),
            username: username.into(),
            password: None,
            security_protocol: "PLAINTEXT".to_string(),
            sasl_mechanism: "SCRAM-SHA-256".to_string(),
            session_timeout_ms: 6000,
        }
    }

    pub fn topic(&self) -> String {
        topic_for_user(&self.username)
    }

    pub fn group_id(&self) -> String {
        group_for_user(&self.username)
    }

    fn uses_sasl(&self) -> bool {
        self.security_protocol.to_ascii_uppercase().starts_with("SASL")
    }

    /// Settings shared by the producer and the consumer.
    pub fn client_config(&self) -> Result<ClientConfig> {
        if self.broker.trim().is_empty() {
            return Err(Error::InvalidConfig("broker address is empty".to_string()));
        }

        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", &self.broker)
            .set("security.protocol", &self.security_protocol);

        if self.uses_sasl() {
            let password = self.password.as_deref().ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "a password is required for {}",
                    self.security_protocol
                ))
            })?;
            config
                .set("sasl.mechanisms", &self.sasl_mechanism)
                .set("sasl.username", &self.username)
                .set("sasl.password", password);
        }

        Ok(config)
    }

    /// Consumer settings for [`crate::AlertWatcher`].
    pub fn consumer_config(&self) -> Result<ClientConfig> {
        let mut config = self.client_config()?;
        config
            .set("group.id", self.group_id())
            .set("session.timeout.ms", self.session_timeout_ms.to_string())
            .set("auto.offset.reset", "earliest")
            .set("enable.auto.commit", "true");
        Ok(config)
    }
}
