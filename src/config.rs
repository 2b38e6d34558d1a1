//! Scanner configuration.
//!
//! The reference configuration lives in `ScannerConfig::default()`. Any field
//! can be overridden from the environment (see `ScannerConfig::from_env`).
//! The resulting value is immutable and passed explicitly into the runtime.

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use std::collections::BTreeSet;
use std::env;
use std::str::FromStr;
use tracing::warn;

use crate::error::ConfigError;
use crate::models::instrument::Instrument;

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

const IST_OFFSET_MINUTES: i32 = 5 * 60 + 30;

const WATCHLIST: &[&str] = &[
    "^NSEI", "^NSEBANK",
    "YESBANK.NS", "UCOBANK.NS", "IOB.NS", "MAHABANK.NS",
    "CENTRALBK.NS", "SOUTHBANK.NS", "UJJIVANSFB.NS",
    "RPOWER.NS", "JPPOWER.NS", "GMRINFRA.NS", "SUZLON.NS",
    "RTNPOWER.NS", "SJVN.NS", "NHPC.NS", "IRFC.NS", "RVNL.NS",
    "IDEA.NS", "MTNL.NS", "HFCL.NS", "TRIDENT.NS",
    "BCG.NS", "INFIBEAM.NS",
    "SAIL.NS", "NATIONALUM.NS", "HINDCOPPER.NS",
    "RENUKA.NS", "BAJAJHIND.NS", "MMTC.NS", "NBCC.NS",
    "EASEMYTRIP.NS", "ZOMATO.NS",
];

const HOLIDAYS: &[&str] = &["2024-12-25", "2025-01-26", "2025-03-14", "2025-03-31"];

/// Get the deployment environment name (`APP_ENV`), defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub watchlist: Vec<Instrument>,
    pub holidays: BTreeSet<NaiveDate>,
    /// Candle interval understood by the data source, e.g. `1m`.
    pub interval: String,
    /// Lookback requested from the data source, e.g. `1d`.
    pub period: String,
    pub fast_period: usize,
    pub slow_period: usize,
    /// Number of completed candles re-checked on every scan.
    pub window: usize,
    /// Instruments with fewer candles are not scanned.
    pub min_candles: usize,
    /// Non-index instruments closing above this are ignored.
    pub max_price: f64,
    pub market_open: NaiveTime,
    pub market_close: NaiveTime,
    pub utc_offset: FixedOffset,
    pub data_source_url: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            watchlist: WATCHLIST.iter().map(|s| Instrument::new(*s)).collect(),
            holidays: HOLIDAYS
                .iter()
                .filter_map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
                .collect(),
            interval: "1m".to_string(),
            period: "1d".to_string(),
            fast_period: 9,
            slow_period: 21,
            window: 5,
            min_candles: 200,
            max_price: 30.0,
            market_open: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            market_close: NaiveTime::from_hms_opt(15, 30, 0).unwrap_or_default(),
            utc_offset: FixedOffset::east_opt(IST_OFFSET_MINUTES * 60)
                .expect("IST offset is within range"),
            data_source_url: DEFAULT_YAHOO_BASE_URL.to_string(),
        }
    }
}

impl ScannerConfig {
    /// Reference configuration overlaid with `SCANNER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup("SCANNER_WATCHLIST") {
            cfg.watchlist = split_list(&raw).map(Instrument::new).collect();
        }
        if let Some(raw) = lookup("SCANNER_HOLIDAYS") {
            cfg.holidays = split_list(&raw)
                .map(|d| {
                    NaiveDate::parse_from_str(d, "%Y-%m-%d")
                        .map_err(|_| ConfigError::InvalidHoliday(d.to_string()))
                })
                .collect::<Result<_, _>>()?;
        }
        if let Some(v) = lookup("SCANNER_INTERVAL") {
            cfg.interval = v;
        }
        if let Some(v) = lookup("SCANNER_PERIOD") {
            cfg.period = v;
        }
        if let Some(v) = parse_var(&lookup, "SCANNER_FAST_SPAN")? {
            cfg.fast_period = v;
        }
        if let Some(v) = parse_var(&lookup, "SCANNER_SLOW_SPAN")? {
            cfg.slow_period = v;
        }
        if let Some(v) = parse_var(&lookup, "SCANNER_WINDOW")? {
            cfg.window = v;
        }
        if let Some(v) = parse_var(&lookup, "SCANNER_MIN_CANDLES")? {
            cfg.min_candles = v;
        }
        if let Some(v) = parse_var(&lookup, "SCANNER_MAX_PRICE")? {
            cfg.max_price = v;
        }
        if let Some(minutes) = parse_var::<i32, _>(&lookup, "SCANNER_UTC_OFFSET_MINUTES")? {
            cfg.utc_offset =
                FixedOffset::east_opt(minutes * 60).ok_or_else(|| ConfigError::InvalidValue {
                    key: "SCANNER_UTC_OFFSET_MINUTES",
                    value: minutes.to_string(),
                    reason: "offset out of range".to_string(),
                })?;
        }
        if let Some(v) = lookup("YAHOO_BASE_URL") {
            cfg.data_source_url = v;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.watchlist.is_empty() {
            return Err(ConfigError::EmptyWatchlist);
        }
        if self.fast_period == 0 || self.fast_period >= self.slow_period {
            return Err(ConfigError::SpanOrder {
                fast: self.fast_period,
                slow: self.slow_period,
            });
        }
        if self.window < 2 {
            return Err(ConfigError::InvalidValue {
                key: "SCANNER_WINDOW",
                value: self.window.to_string(),
                reason: "window needs at least two candles".to_string(),
            });
        }
        if self.min_candles == 0 {
            return Err(ConfigError::InvalidValue {
                key: "SCANNER_MIN_CANDLES",
                value: "0".to_string(),
                reason: "at least one candle is required".to_string(),
            });
        }
        Ok(())
    }
}

/// Telegram delivery settings. Secrets are optional here; a missing one
/// surfaces later as a delivery failure.
#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub token: Option<String>,
    pub chat_id: Option<String>,
    pub api_url: String,
}

impl TelegramSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("TELEGRAM_TOKEN").filter(|v| !v.is_empty());
        let chat_id = lookup("CHAT_ID").filter(|v| !v.is_empty());

        if token.is_none() {
            warn!("TELEGRAM_TOKEN is not set, alerts will not be delivered");
        }
        if chat_id.is_none() {
            warn!("CHAT_ID is not set, alerts will not be delivered");
        }

        Self {
            token,
            chat_id,
            api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
        }
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
