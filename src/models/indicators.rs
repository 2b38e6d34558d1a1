use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time bucket of price data. Only `close` feeds the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// Candle carrying only a close, as returned for thin intraday rows.
    pub fn from_close(close: f64, timestamp: DateTime<Utc>) -> Self {
        Self::new(close, close, close, close, 0.0, timestamp)
    }
}

/// Fast and slow EMA series, index-aligned with the candles they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub fast_period: usize,
    pub slow_period: usize,
    pub fast: Vec<f64>,
    pub slow: Vec<f64>,
}

impl IndicatorSeries {
    pub fn len(&self) -> usize {
        self.fast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fast.is_empty()
    }

    /// `(fast, slow)` at `index`.
    pub fn at(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.fast.get(index)?, *self.slow.get(index)?))
    }
}
