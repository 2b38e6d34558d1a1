//! One gated scan: gate -> fetch -> per-instrument scan -> notify.
//!
//! Failure policy per stage:
//! - whole-fetch errors abort the scan (logged at `error`)
//! - per-instrument errors skip that instrument (logged at `warn`)
//! - notification errors are counted and dropped (logged at `error`)
//!
//! Nothing here panics or returns an error to the process.

use chrono::{DateTime, TimeZone};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::ScannerConfig;
use crate::core::gate::{GateDecision, MarketGate};
use crate::error::{InstrumentError, ScanError};
use crate::models::instrument::Instrument;
use crate::models::signal::Signal;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::Notifier;
use crate::signals::scanner::CrossoverScanner;

/// Summary of a completed scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub scanned: usize,
    pub skipped: Vec<(Instrument, InstrumentError)>,
    pub signals: Vec<Signal>,
    pub failed_notifications: usize,
}

#[derive(Debug)]
pub enum RunOutcome {
    Skipped(GateDecision),
    Completed(ScanReport),
    Aborted(ScanError),
}

pub struct ScanRuntime {
    config: ScannerConfig,
    gate: MarketGate,
    scanner: CrossoverScanner,
    data_provider: Arc<dyn MarketDataProvider + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
}

impl ScanRuntime {
    pub fn new(
        config: ScannerConfig,
        data_provider: Arc<dyn MarketDataProvider + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self {
            gate: MarketGate::new(&config),
            scanner: CrossoverScanner::new(&config),
            config,
            data_provider,
            notifier,
        }
    }

    pub fn gate(&self) -> &MarketGate {
        &self.gate
    }

    /// Run the gate for `now` and, if the market is open, one full scan.
    pub async fn run<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> RunOutcome {
        let decision = self.gate.evaluate(now);
        if !decision.is_open() {
            info!(decision = %decision, "Skipping scan: {}", decision);
            return RunOutcome::Skipped(decision);
        }

        let local = now.with_timezone(&self.config.utc_offset);
        info!("Scanning at {}", local.format("%H:%M:%S"));

        match self.scan().await {
            Ok(report) => {
                info!(
                    scanned = report.scanned,
                    skipped = report.skipped.len(),
                    signals = report.signals.len(),
                    failed_notifications = report.failed_notifications,
                    "Scan complete: {} scanned, {} skipped, {} signals",
                    report.scanned,
                    report.skipped.len(),
                    report.signals.len()
                );
                RunOutcome::Completed(report)
            }
            Err(e) => {
                error!(error = %e, "Scan aborted: {}", e);
                RunOutcome::Aborted(e)
            }
        }
    }

    /// Scan every instrument in the watchlist, ignoring the gate.
    pub async fn scan(&self) -> Result<ScanReport, ScanError> {
        let watchlist = &self.config.watchlist;
        let series = self
            .data_provider
            .fetch_candles(watchlist, &self.config.interval, &self.config.period)
            .await?;

        let mut report = ScanReport::default();

        for instrument in watchlist {
            let result = match series.get(&instrument.symbol) {
                Some(candles) => self.scanner.scan(instrument, candles),
                None => Err(InstrumentError::MissingData),
            };

            let signal = match result {
                Ok(signal) => signal,
                Err(e) => {
                    warn!(symbol = %instrument, error = %e, "Skipping {}: {}", instrument, e);
                    report.skipped.push((instrument.clone(), e));
                    continue;
                }
            };
            report.scanned += 1;

            let Some(signal) = signal else {
                debug!(symbol = %instrument, "No crossover for {}", instrument);
                continue;
            };

            info!(
                symbol = %instrument,
                direction = ?signal.direction,
                price = signal.price,
                "{:?} signal for {} at {}",
                signal.direction,
                instrument,
                signal.price
            );

            let message = signal.alert_message(self.config.fast_period, &self.config.utc_offset);
            if let Err(e) = self.notifier.send(&message).await {
                error!(symbol = %instrument, error = %e, "Failed to deliver alert for {}", instrument);
                report.failed_notifications += 1;
            }
            report.signals.push(signal);
        }

        Ok(report)
    }
}
