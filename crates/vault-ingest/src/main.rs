use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use vault_core::VaultConfig;
use vault_ingest::{FileIngestor, Shutdown};

#[derive(Debug, Parser)]
#[command(name = "vault")]
#[command(about = "Normalize, dedup and categorize credential dumps into an append-only JSONL store", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory polled for source files
    #[arg(long)]
    input: Option<PathBuf>,

    /// Append-only JSONL store
    #[arg(long)]
    output: Option<PathBuf>,

    /// Category table (JSON)
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Seconds between directory scans
    #[arg(long)]
    interval: Option<u64>,

    /// Source file extension, without the dot
    #[arg(long)]
    extension: Option<String>,

    /// Run a single batch and exit
    #[arg(long)]
    once: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<VaultConfig> {
        let mut config = match &self.config {
            Some(path) => VaultConfig::from_file(path)?,
            None => VaultConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input_dir = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(categories) = &self.categories {
            config.category_path = categories.clone();
        }
        if let Some(interval) = self.interval {
            config.poll_interval_secs = interval;
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let mut ingestor = FileIngestor::open(&config).context("failed to start ingestion")?;

    tracing::info!(input = %config.input_dir.display(), "monitoring directory, press Ctrl+C to stop");
    let interval = Duration::from_secs(config.poll_interval_secs);
    let mut shutdown = Shutdown::ctrl_c().await;

    loop {
        let (returned, result) = tokio::task::spawn_blocking(move || {
            let result = ingestor.poll();
            (ingestor, result)
        })
        .await
        .context("ingestion task panicked")?;
        ingestor = returned;

        if let Err(e) = result {
            tracing::error!(error = %e, "batch failed, retrying on next scan");
        }
        if cli.once || shutdown.is_requested() {
            break;
        }

        tokio::select! {
            () = shutdown.requested() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    ingestor.flush()?;
    Ok(())
}
