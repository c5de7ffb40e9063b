//! Command-line interface for star-alerts
//!
//! # Usage Examples
//!
//! ## Load the catalog
//! ```bash
//! star-alerts load-catalog --catalog BSC.json --redis-url redis://localhost:6379/0
//! ```
//!
//! ## Publish alerts
//! ```bash
//! # Every 12 seconds, forever
//! BROKER=broker:9094 USERNAME=astro PASSWORD=secret star-alerts generate
//!
//! # Ten reproducible alerts against a local broker
//! star-alerts generate --broker localhost:9092 --username dev \
//!   --security-protocol PLAINTEXT --seed 42 --max-messages 10 --interval-secs 1
//! ```
//!
//! ## Watch the alert topic
//! ```bash
//! star-alerts watch --broker localhost:9092 --username dev --security-protocol PLAINTEXT
//! ```
//!
//! Settings can also come from a `.env` file in the working directory.

use anyhow::Context;
use clap::{Parser, Subcommand};
use star_alerts::{AlertContext, AlertLoop, GenerateOpts, LoadOpts, StoreOpts, WatchOpts};
use star_catalog::{CatalogLoader, RedisStore};
use tokio_util::sync::CancellationToken;

use alert_kafka::{AlertWatcher, KafkaConfig};

#[derive(Parser)]
#[command(name = "star-alerts")]
#[command(about = "Load the Bright Star Catalogue into Redis and publish synthetic alerts to Kafka")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the star catalog into the key-value store (run once)
    LoadCatalog {
        #[command(flatten)]
        opts: LoadOpts,
    },

    /// Publish a random alert on a fixed interval
    Generate {
        #[command(flatten)]
        kafka: KafkaConfig,

        #[command(flatten)]
        store: StoreOpts,

        #[command(flatten)]
        opts: GenerateOpts,
    },

    /// Consume and log alerts from the topic
    Watch {
        #[command(flatten)]
        kafka: KafkaConfig,

        #[command(flatten)]
        opts: WatchOpts,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::LoadCatalog { opts } => {
            let store = RedisStore::connect(&opts.store.redis_url)
                .await
                .with_context(|| {
                    format!("Failed to connect to Redis at {}", opts.store.redis_url)
                })?;
            let summary = CatalogLoader::new(&store, opts.store.collection.clone())
                .load_file(&opts.catalog)
                .await
                .with_context(|| format!("Failed to load {}", opts.catalog.display()))?;
            tracing::info!("Total stars stored in Redis: {}", summary.records);
        }
        Commands::Generate { kafka, store, opts } => {
            let ctx = AlertContext::connect(&store, &kafka).await?;
            let cancel = shutdown_on_ctrl_c();
            AlertLoop::from_context(&ctx, &opts)
                .run(cancel)
                .await
                .context("Alert generation failed")?;
        }
        Commands::Watch { kafka, opts } => {
            let watcher = AlertWatcher::new(&kafka).context("Failed to create Kafka consumer")?;
            let cancel = shutdown_on_ctrl_c();
            watcher
                .run(cancel, opts.max_messages)
                .await
                .with_context(|| format!("Watching '{}' failed", watcher.topic()))?;
        }
    }

    Ok(())
}

/// Cancel the returned token on the first Ctrl-C.
fn shutdown_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, stopping after the current cycle");
            token.cancel();
        }
    });
    cancel
}
