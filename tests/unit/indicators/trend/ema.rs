//! Unit tests for EMA indicator

use chrono::{Duration, TimeZone, Utc};
use crossover_scanner::indicators::trend::{calculate_ema_pair, ema_series, smoothing};
use crossover_scanner::models::indicators::Candle;

fn create_test_candles(closes: &[f64]) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2025, 1, 2, 3, 30, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::from_close(c, start + Duration::minutes(i as i64)))
        .collect()
}

#[test]
fn test_smoothing_factor() {
    assert!((smoothing(9) - 0.2).abs() < 1e-12);
    assert!((smoothing(21) - 2.0 / 22.0).abs() < 1e-12);
}

#[test]
fn test_ema_seeds_from_first_price() {
    let prices = [10.0, 11.0, 12.5, 9.0];
    let ema = ema_series(&prices, 9);
    assert_eq!(ema.len(), prices.len());
    assert_eq!(ema[0], 10.0);
}

#[test]
fn test_ema_recursive_values() {
    // span 3 -> k = 0.5
    let ema = ema_series(&[1.0, 2.0, 3.0], 3);
    assert_eq!(ema, vec![1.0, 1.5, 2.25]);
}

#[test]
fn test_ema_single_price() {
    assert_eq!(ema_series(&[42.0], 21), vec![42.0]);
}

#[test]
fn test_ema_empty_input() {
    assert!(ema_series(&[], 9).is_empty());
}

#[test]
fn test_constant_prices_give_identical_series() {
    let candles = create_test_candles(&[17.25; 250]);
    let series = calculate_ema_pair(&candles, 9, 21).unwrap();

    assert_eq!(series.len(), 250);
    assert_eq!(series.slow.len(), 250);
    for i in 0..series.len() {
        assert_eq!(series.fast[i], 17.25);
        assert_eq!(series.slow[i], 17.25);
    }
}

#[test]
fn test_ema_pair_lengths_match_candles() {
    let closes: Vec<f64> = (0..37).map(|i| 20.0 + (i as f64 * 0.3).sin()).collect();
    let candles = create_test_candles(&closes);
    let series = calculate_ema_pair(&candles, 9, 21).unwrap();

    assert_eq!(series.fast.len(), candles.len());
    assert_eq!(series.slow.len(), candles.len());
    assert_eq!(series.fast[0], closes[0]);
    assert_eq!(series.slow[0], closes[0]);
    assert_eq!((series.fast_period, series.slow_period), (9, 21));
}

#[test]
fn test_ema_pair_requires_candles() {
    assert!(calculate_ema_pair(&[], 9, 21).is_none());
}

#[test]
fn test_fast_ema_reacts_faster() {
    let mut closes = vec![10.0; 50];
    closes.push(20.0);
    let candles = create_test_candles(&closes);
    let series = calculate_ema_pair(&candles, 9, 21).unwrap();
    let (fast, slow) = series.at(50).unwrap();
    assert!(fast > slow);
}
