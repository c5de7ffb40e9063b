//! Alert generator over a loaded star catalog.

use chrono::{DateTime, Utc};
use futures::stream::{self, Stream};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use star_catalog::StarCatalog;
use tracing::debug;

use crate::error::GenerateError;
use crate::kinds::{EventKind, SourceKind};
use crate::message::AlertMessage;
use crate::offset::TimeOffset;
use crate::{MAX_URGENCY, MIN_URGENCY};

/// Produces one random [`AlertMessage`] per call.
///
/// Star ids are drawn uniformly from `1..=catalog_size`; the catalog must hold
/// every id in that range or generation fails.
pub struct AlertGenerator<R = StdRng> {
    catalog: StarCatalog,
    catalog_size: u32,
    rng: R,
}

impl AlertGenerator<StdRng> {
    /// Create a generator; `seed` makes the sequence reproducible.
    pub fn new(catalog: StarCatalog, catalog_size: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(catalog, catalog_size, rng)
    }
}

impl<R: Rng + Send> AlertGenerator<R> {
    pub fn with_rng(catalog: StarCatalog, catalog_size: u32, rng: R) -> Self {
        Self {
            catalog,
            catalog_size,
            rng,
        }
    }

    pub fn catalog_size(&self) -> u32 {
        self.catalog_size
    }

    /// Generate an alert dated relative to the current time.
    pub async fn next_alert(&mut self) -> Result<AlertMessage, GenerateError> {
        self.next_alert_at(Utc::now()).await
    }

    /// Generate an alert dated relative to `now`.
    pub async fn next_alert_at(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<AlertMessage, GenerateError> {
        if self.catalog_size == 0 {
            return Err(GenerateError::EmptyCatalog);
        }

        let event = EventKind::random(&mut self.rng);
        let source = SourceKind::random(&mut self.rng);
        let date = TimeOffset::random(&mut self.rng).before(now);
        let star_id = self.rng.gen_range(1..=self.catalog_size);
        let urgency = self.rng.gen_range(MIN_URGENCY..=MAX_URGENCY);

        let star = self.catalog.lookup(star_id).await?;
        debug!("Drew star {star_id} ({})", star.title);

        Ok(AlertMessage {
            event,
            source,
            date,
            ra: star.ra,
            dec: star.dec,
            name: star.title,
            urgency,
        })
    }

    /// Turn the generator into an endless stream of alerts.
    ///
    /// The stream never ends on its own; stop polling it after an error.
    pub fn into_stream(self) -> impl Stream<Item = Result<AlertMessage, GenerateError>> {
        stream::unfold(self, |mut generator| async move {
            let alert = generator.next_alert().await;
            Some((alert, generator))
        })
    }
}
