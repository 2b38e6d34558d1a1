//! Market data provider interface.

use std::collections::HashMap;

use crate::error::MarketDataError;
use crate::models::indicators::Candle;
use crate::models::instrument::Instrument;

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Fetch candles for every instrument over `period` at `interval`.
    ///
    /// Returns candles keyed by symbol, oldest first. A symbol the source
    /// could not serve is left out of the map; only a failure of the source
    /// as a whole is an `Err`.
    async fn fetch_candles(
        &self,
        instruments: &[Instrument],
        interval: &str,
        period: &str,
    ) -> Result<HashMap<String, Vec<Candle>>, MarketDataError>;
}

/// Provider serving a fixed, in-memory set of series.
#[derive(Debug, Default, Clone)]
pub struct StaticMarketDataProvider {
    series: HashMap<String, Vec<Candle>>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: impl Into<String>, candles: Vec<Candle>) -> Self {
        self.series.insert(symbol.into(), candles);
        self
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn fetch_candles(
        &self,
        instruments: &[Instrument],
        _interval: &str,
        _period: &str,
    ) -> Result<HashMap<String, Vec<Candle>>, MarketDataError> {
        Ok(instruments
            .iter()
            .filter_map(|i| {
                self.series
                    .get(&i.symbol)
                    .map(|candles| (i.symbol.clone(), candles.clone()))
            })
            .collect())
    }
}
