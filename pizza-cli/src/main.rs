use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use pizza_cli::{config::PricingConfig, event_loader, logging};

/// Replay a recorded pizza order form session.
///
/// Reads form events (field changes, blurs, size and ingredient picks,
/// reset, submit, dismiss) from a CSV file, applies them in order, and prints
/// the bill each time an order is submitted.
#[derive(Debug, Parser)]
#[command(name = "pizza-order")]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file with `event,target,value` rows
    #[arg(short, long)]
    events: PathBuf,

    /// TOML price table; built-in prices are used when omitted
    #[arg(short, long)]
    prices: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. `debug`, `pizza_core=debug`)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also append log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level)?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = match &cli.prices {
        Some(path) => PricingConfig::load(path)
            .with_context(|| format!("Failed to load prices: {}", path.display()))?,
        None => PricingConfig::default(),
    };
    debug!("price table:\n{config}");

    let events = event_loader::load_from_file(&cli.events)
        .with_context(|| format!("Failed to load events: {}", cli.events.display()))?;
    info!("replaying {} events from {}", events.len(), cli.events.display());

    let summary = pizza_cli::run(events, &config, &mut io::stdout().lock())
        .context("Failed to write bill")?;

    info!(
        orders = summary.orders,
        rejected = summary.rejected,
        submit_enabled = summary.final_status.submit_enabled,
        "replay finished"
    );
    logging::disable_file_logging();

    Ok(())
}
