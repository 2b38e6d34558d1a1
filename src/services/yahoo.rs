//! Yahoo Finance chart API market data provider

use std::collections::HashMap;
use std::time::Duration;

use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::MarketDataError;
use crate::models::indicators::Candle;
use crate::models::instrument::Instrument;
use crate::services::market_data::MarketDataProvider;

const USER_AGENT: &str = concat!("crossover-scanner/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Rows without a close (halted or empty minutes) are dropped.
    fn into_candles(self) -> Vec<Candle> {
        let quote = self.indicators.quote.into_iter().next().unwrap_or_default();
        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let close = field(&quote.close, i)?;
                let timestamp = DateTime::from_timestamp(ts, 0)?;
                Some(Candle::new(
                    field(&quote.open, i).unwrap_or(close),
                    field(&quote.high, i).unwrap_or(close),
                    field(&quote.low, i).unwrap_or(close),
                    close,
                    field(&quote.volume, i).unwrap_or(0.0),
                    timestamp,
                ))
            })
            .collect()
    }
}

fn field(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

pub struct YahooFinanceProvider {
    base_url: String,
    client: Client,
}

impl YahooFinanceProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    error = %e,
                    "Yahoo: client builder failed, using default client without timeout"
                );
                Client::new()
            });
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn chart_url(&self, symbol: &str, interval: &str, period: &str) -> Result<Url, MarketDataError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("range", period)
            .append_pair("interval", interval);
        Ok(url)
    }

    /// Fetch one symbol. `Ok(None)` means the symbol is unusable but the
    /// source itself answered.
    async fn fetch_symbol(
        &self,
        symbol: &str,
        interval: &str,
        period: &str,
    ) -> Result<Option<Vec<Candle>>, MarketDataError> {
        let url = self.chart_url(symbol, interval, period)?;

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() || e.is_timeout() => {
                return Err(MarketDataError::Unreachable(e));
            }
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Yahoo: request failed for {}", symbol);
                return Ok(None);
            }
        };

        let status = response.status();
        let body: ChartResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    symbol = %symbol,
                    status = %status,
                    error = %e,
                    "Yahoo: unreadable chart response for {}",
                    symbol
                );
                return Ok(None);
            }
        };

        if let Some(err) = body.chart.error {
            warn!(
                symbol = %symbol,
                code = %err.code,
                description = err.description.as_deref().unwrap_or(""),
                "Yahoo: chart error for {}: {}",
                symbol,
                err.code
            );
            return Ok(None);
        }

        let Some(result) = body.chart.result.and_then(|r| r.into_iter().next()) else {
            warn!(symbol = %symbol, "Yahoo: empty chart result for {}", symbol);
            return Ok(None);
        };

        let candles = result.into_candles();
        debug!(
            symbol = %symbol,
            count = candles.len(),
            "Yahoo: fetched {} candles for {}",
            candles.len(),
            symbol
        );
        Ok(Some(candles))
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn fetch_candles(
        &self,
        instruments: &[Instrument],
        interval: &str,
        period: &str,
    ) -> Result<HashMap<String, Vec<Candle>>, MarketDataError> {
        let mut out = HashMap::with_capacity(instruments.len());

        for instrument in instruments {
            if let Some(candles) = self
                .fetch_symbol(&instrument.symbol, interval, period)
                .await?
            {
                out.insert(instrument.symbol.clone(), candles);
            }
        }

        Ok(out)
    }
}
