//! Unit tests for the market gate

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use crossover_scanner::config::ScannerConfig;
use crossover_scanner::core::gate::{GateDecision, MarketGate};

fn ist(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(19_800)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, s)
        .unwrap()
}

fn gate() -> MarketGate {
    MarketGate::new(&ScannerConfig::default())
}

#[test]
fn test_open_during_session() {
    assert_eq!(gate().evaluate(&ist(2025, 1, 2, 11, 15, 0)), GateDecision::Open);
}

#[test]
fn test_opening_bell_is_open() {
    assert_eq!(gate().evaluate(&ist(2025, 1, 2, 9, 0, 0)), GateDecision::Open);
}

#[test]
fn test_before_open() {
    assert_eq!(
        gate().evaluate(&ist(2025, 1, 2, 8, 59, 59)),
        GateDecision::BeforeOpen
    );
}

#[test]
fn test_close_boundary_is_inclusive() {
    assert_eq!(gate().evaluate(&ist(2025, 1, 2, 15, 30, 0)), GateDecision::Open);
}

#[test]
fn test_one_second_after_close() {
    assert_eq!(
        gate().evaluate(&ist(2025, 1, 2, 15, 30, 1)),
        GateDecision::AfterClose
    );
}

#[test]
fn test_evening_is_closed() {
    assert_eq!(
        gate().evaluate(&ist(2025, 1, 2, 21, 0, 0)),
        GateDecision::AfterClose
    );
}

#[test]
fn test_holiday_always_skips() {
    for (h, m) in [(9, 0), (12, 0), (15, 30), (20, 0)] {
        assert_eq!(
            gate().evaluate(&ist(2025, 3, 14, h, m, 0)),
            GateDecision::Holiday
        );
    }
}

#[test]
fn test_utc_input_is_converted_to_market_time() {
    // 10:00 UTC is 15:30 IST
    let now = Utc.with_ymd_and_hms(2025, 1, 2, 10, 0, 0).unwrap();
    assert_eq!(gate().evaluate(&now), GateDecision::Open);

    // 04:00 UTC on 25 Dec is 09:30 IST on a holiday
    let now = Utc.with_ymd_and_hms(2024, 12, 25, 4, 0, 0).unwrap();
    assert_eq!(gate().evaluate(&now), GateDecision::Holiday);
}

#[test]
fn test_holiday_uses_market_date() {
    // 19:00 UTC on 13 March is already 14 March 00:30 in IST
    let now = Utc.with_ymd_and_hms(2025, 3, 13, 19, 0, 0).unwrap();
    assert_eq!(gate().evaluate(&now), GateDecision::Holiday);
}

#[test]
fn test_is_open() {
    assert!(GateDecision::Open.is_open());
    assert!(!GateDecision::Holiday.is_open());
    assert!(!GateDecision::AfterClose.is_open());
}
