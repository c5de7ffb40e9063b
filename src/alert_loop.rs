//! The generate → publish → wait cycle.

use std::sync::Arc;

use alert_generator::{AlertGenerator, GenerateError};
use alert_kafka::AlertPublisher;
use rand::rngs::StdRng;
use rand::Rng;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::GenerateOpts;
use crate::context::AlertContext;
use crate::ticker::{IntervalTicker, Ticker};

/// Counters for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub delivered: u64,
    pub failed: u64,
}

/// Periodic alert publisher.
///
/// Each cycle generates one alert, publishes it and waits for the ticker.
/// Publish failures are logged and counted; generation failures end the run.
pub struct AlertLoop<T = IntervalTicker, R = StdRng> {
    generator: AlertGenerator<R>,
    publisher: Arc<dyn AlertPublisher>,
    ticker: T,
    max_cycles: Option<u64>,
}

impl AlertLoop<IntervalTicker, StdRng> {
    pub fn from_context(ctx: &AlertContext, opts: &GenerateOpts) -> Self {
        let generator = AlertGenerator::new(ctx.catalog.clone(), opts.catalog_size, opts.seed);
        AlertLoop::new(
            generator,
            ctx.publisher.clone(),
            IntervalTicker::new(opts.interval()),
        )
        .with_max_cycles(opts.max_messages)
    }
}

impl<T: Ticker, R: Rng + Send> AlertLoop<T, R> {
    pub fn new(
        generator: AlertGenerator<R>,
        publisher: Arc<dyn AlertPublisher>,
        ticker: T,
    ) -> Self {
        Self {
            generator,
            publisher,
            ticker,
            max_cycles: None,
        }
    }

    /// Stop after `max_cycles` alerts; `None` runs until cancelled.
    pub fn with_max_cycles(mut self, max_cycles: Option<u64>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    pub async fn run(mut self, cancel: CancellationToken) -> Result<RunSummary, GenerateError> {
        let mut summary = RunSummary::default();
        info!(
            "Publishing alerts to '{}' (catalog size {})",
            self.publisher.topic(),
            self.generator.catalog_size()
        );

        loop {
            if cancel.is_cancelled() || self.limit_reached(&summary) {
                break;
            }

            let alert = self.generator.next_alert().await?;

            let publish_started = Instant::now();
            match self.publisher.publish(&alert).await {
                Ok(report) => {
                    info!(
                        key = %report.key,
                        offset = report.offset,
                        "Message sent to {} [{}]",
                        report.topic,
                        report.partition
                    );
                    summary.delivered += 1;
                }
                Err(e) => {
                    error!("Message status: failed: {e}");
                    summary.failed += 1;
                }
            }
            match serde_json::to_string(&alert) {
                Ok(json) => info!("{json}"),
                Err(_) => info!("{alert:?}"),
            }
            summary.cycles += 1;

            if self.limit_reached(&summary) {
                break;
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = self.ticker.wait(publish_started) => {}
            }
        }

        info!(
            "Alert loop stopped after {} cycles ({} delivered, {} failed)",
            summary.cycles, summary.delivered, summary.failed
        );
        Ok(summary)
    }

    fn limit_reached(&self, summary: &RunSummary) -> bool {
        self.max_cycles
            .is_some_and(|max_cycles| summary.cycles >= max_cycles)
    }
}
