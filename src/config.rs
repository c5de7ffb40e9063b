//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use star_catalog::{BSC_SIZE, DEFAULT_COLLECTION, DEFAULT_REDIS_URL};

/// Key-value store options
#[derive(Args, Clone, Debug)]
pub struct StoreOpts {
    /// Redis connection URL
    #[arg(long, env = "REDIS_URL", default_value = DEFAULT_REDIS_URL)]
    pub redis_url: String,

    /// Hash the catalog is stored under
    #[arg(long, default_value = DEFAULT_COLLECTION)]
    pub collection: String,
}

/// Catalog loading options
#[derive(Args, Clone, Debug)]
pub struct LoadOpts {
    /// Path to the JSON star catalog
    #[arg(long, default_value = "BSC.json")]
    pub catalog: PathBuf,

    #[command(flatten)]
    pub store: StoreOpts,
}

/// Alert generation options
#[derive(Args, Clone, Debug)]
pub struct GenerateOpts {
    /// Seconds between the start of one publish and the next alert
    #[arg(long, default_value_t = 12)]
    pub interval_secs: u64,

    /// Number of stars in the loaded catalog; ids are drawn from 1..=N
    #[arg(long, default_value_t = BSC_SIZE)]
    pub catalog_size: u32,

    /// Stop after this many alerts (default: run until interrupted)
    #[arg(long)]
    pub max_messages: Option<u64>,

    /// Random seed for a reproducible alert sequence
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateOpts {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            interval_secs: 12,
            catalog_size: BSC_SIZE,
            max_messages: None,
            seed: None,
        }
    }
}

/// Alert watching options
#[derive(Args, Clone, Debug)]
pub struct WatchOpts {
    /// Stop after this many messages (default: run until interrupted)
    #[arg(long)]
    pub max_messages: Option<u64>,
}
