//! Error types, one per pipeline stage.
//!
//! Each stage decides explicitly whether its errors are swallowed or
//! propagated; see `core::runtime` for where that happens.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid holiday date {0:?}, expected YYYY-MM-DD")]
    InvalidHoliday(String),

    #[error("watchlist is empty")]
    EmptyWatchlist,

    #[error("fast span ({fast}) must be shorter than slow span ({slow})")]
    SpanOrder { fast: usize, slow: usize },
}

/// Failure of the data source as a whole. Aborts the scan.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("market data source unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("invalid market data url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Failure confined to one instrument. The scan skips it and moves on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    #[error("no data returned")]
    MissingData,

    #[error("not enough candles: {got} < {need}")]
    InsufficientCandles { got: usize, need: usize },

    #[error("candle timestamps out of order at index {0}")]
    Unordered(usize),

    #[error("non-finite close at index {0}")]
    NonFiniteClose(usize),
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notifier not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error("delivery request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("delivery rejected with status {0}")]
    Rejected(reqwest::StatusCode),

    #[error("invalid notifier url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}
