//! Crossover scanner
//!
//! Runs one gated scan and exits. Meant to be triggered by an external
//! scheduler (cron, CI schedule) every few minutes during market hours.

use crossover_scanner::config::{get_environment, ScannerConfig, TelegramSettings};
use crossover_scanner::core::runtime::{RunOutcome, ScanRuntime};
use crossover_scanner::logging;
use crossover_scanner::services::{
    MarketDataProvider, Notifier, TelegramNotifier, YahooFinanceProvider,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = ScannerConfig::from_env()?;
    info!(
        environment = %get_environment(),
        instruments = config.watchlist.len(),
        interval = %config.interval,
        "Starting crossover scanner"
    );

    let data_provider: Arc<dyn MarketDataProvider + Send + Sync> =
        Arc::new(YahooFinanceProvider::new(config.data_source_url.clone()));
    let notifier: Arc<dyn Notifier + Send + Sync> =
        Arc::new(TelegramNotifier::new(TelegramSettings::from_env()));

    let runtime = ScanRuntime::new(config, data_provider, notifier);
    let now = runtime.gate().now();

    match runtime.run(&now).await {
        RunOutcome::Skipped(decision) => info!(decision = %decision, "Exiting"),
        RunOutcome::Completed(_) => info!("Done"),
        RunOutcome::Aborted(_) => info!("Exiting after aborted scan"),
    }

    Ok(())
}
