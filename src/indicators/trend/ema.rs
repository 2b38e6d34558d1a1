//! EMA (Exponential Moving Average) indicator

use crate::models::indicators::{Candle, IndicatorSeries};

/// Smoothing factor for a span: `2 / (span + 1)`.
pub fn smoothing(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Recursive EMA over the whole series with no warm-up window:
/// `ema[0] = price[0]`, `ema[i] = price[i] * k + ema[i-1] * (1 - k)`.
pub fn ema_series(prices: &[f64], span: usize) -> Vec<f64> {
    let k = smoothing(span);
    let mut out = Vec::with_capacity(prices.len());
    let mut prev: Option<f64> = None;

    for &price in prices {
        let value = match prev {
            None => price,
            Some(last) => price * k + last * (1.0 - k),
        };
        out.push(value);
        prev = Some(value);
    }

    out
}

/// Fast and slow EMA of the candle closes. `None` if there are no candles.
pub fn calculate_ema_pair(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
) -> Option<IndicatorSeries> {
    if candles.is_empty() {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    Some(IndicatorSeries {
        fast_period,
        slow_period,
        fast: ema_series(&closes, fast_period),
        slow: ema_series(&closes, slow_period),
    })
}
