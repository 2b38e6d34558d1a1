//! Fast/slow EMA crossover scanner.
//!
//! The scanner does not only look at the newest candle. It re-checks a trailing
//! window of completed candles on every run, so a crossover that happened
//! between two scheduled invocations is still reported ("catch-up" scanning).
//! The newest candle is left out of the window because it may still be forming.

use std::ops::Range;

use tracing::debug;

use crate::config::ScannerConfig;
use crate::error::InstrumentError;
use crate::indicators::trend::calculate_ema_pair;
use crate::models::indicators::{Candle, IndicatorSeries};
use crate::models::instrument::Instrument;
use crate::models::signal::{round_price, Signal, SignalDirection};

/// Direction of a strict crossover between two consecutive `(fast, slow)` points.
///
/// Equal values on either side never count as a cross.
pub fn detect_crossover(prev: (f64, f64), curr: (f64, f64)) -> Option<SignalDirection> {
    let (p_fast, p_slow) = prev;
    let (c_fast, c_slow) = curr;

    if p_fast < p_slow && c_fast > c_slow {
        Some(SignalDirection::Buy)
    } else if p_fast > p_slow && c_fast < c_slow {
        Some(SignalDirection::Sell)
    } else {
        None
    }
}

/// Indices of the last `window` candles, excluding the final one.
///
/// For 200 candles and a window of 5 this is `194..199`. Short series clamp
/// at zero.
pub fn trailing_window(len: usize, window: usize) -> Range<usize> {
    let end = len.saturating_sub(1);
    let start = end.saturating_sub(window);
    start..end
}

#[derive(Debug, Clone)]
pub struct CrossoverScanner {
    fast_period: usize,
    slow_period: usize,
    window: usize,
    min_candles: usize,
    max_price: f64,
}

impl CrossoverScanner {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            fast_period: config.fast_period,
            slow_period: config.slow_period,
            window: config.window,
            min_candles: config.min_candles,
            max_price: config.max_price,
        }
    }

    /// Scan one instrument. Returns the chronologically first crossover in the
    /// trailing window, or `None`.
    pub fn scan(
        &self,
        instrument: &Instrument,
        candles: &[Candle],
    ) -> Result<Option<Signal>, InstrumentError> {
        validate_series(candles)?;

        if candles.len() < self.min_candles {
            return Err(InstrumentError::InsufficientCandles {
                got: candles.len(),
                need: self.min_candles,
            });
        }

        let series = calculate_ema_pair(candles, self.fast_period, self.slow_period)
            .ok_or(InstrumentError::MissingData)?;

        Ok(self.first_crossover(instrument, candles, &series))
    }

    /// Walk consecutive pairs of the window in order and stop at the first hit.
    pub fn first_crossover(
        &self,
        instrument: &Instrument,
        candles: &[Candle],
        series: &IndicatorSeries,
    ) -> Option<Signal> {
        let range = trailing_window(candles.len(), self.window);

        for i in range.start + 1..range.end {
            let (prev, curr) = (series.at(i - 1)?, series.at(i)?);
            let candle = &candles[i];
            let price = round_price(candle.close);

            if !instrument.is_index() && price > self.max_price {
                continue;
            }

            if let Some(direction) = detect_crossover(prev, curr) {
                debug!(
                    symbol = %instrument,
                    direction = ?direction,
                    price = price,
                    index = i,
                    "Crossover found for {} at index {}",
                    instrument,
                    i
                );
                return Some(Signal::new(
                    instrument.clone(),
                    direction,
                    price,
                    candle.timestamp,
                ));
            }
        }

        None
    }
}

fn validate_series(candles: &[Candle]) -> Result<(), InstrumentError> {
    if candles.is_empty() {
        return Err(InstrumentError::MissingData);
    }

    for (i, candle) in candles.iter().enumerate() {
        if !candle.close.is_finite() {
            return Err(InstrumentError::NonFiniteClose(i));
        }
        if i > 0 && candle.timestamp < candles[i - 1].timestamp {
            return Err(InstrumentError::Unordered(i));
        }
    }

    Ok(())
}
