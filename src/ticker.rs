//! Pacing between alert cycles.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

/// Waits out the gap between two alert cycles.
#[async_trait]
pub trait Ticker: Send {
    /// Return once the next cycle may start, given that the previous
    /// publish began at `publish_started`.
    async fn wait(&mut self, publish_started: Instant);
}

/// Fixed-period [`Ticker`] on the tokio clock.
///
/// Under a paused test runtime the clock auto-advances, so waits complete
/// immediately in real time.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTicker {
    period: Duration,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn wait(&mut self, publish_started: Instant) {
        tokio::time::sleep_until(publish_started + self.period).await;
    }
}
