//! Unit tests for instruments and alert rendering

use chrono::{FixedOffset, TimeZone, Utc};
use crossover_scanner::models::instrument::Instrument;
use crossover_scanner::models::signal::{format_price, round_price, Signal, SignalDirection};

fn ist() -> FixedOffset {
    FixedOffset::east_opt(19_800).unwrap()
}

#[test]
fn test_index_detection() {
    assert!(Instrument::new("^NSEI").is_index());
    assert!(Instrument::new("^NSEBANK").is_index());
    assert!(!Instrument::new("YESBANK.NS").is_index());
}

#[test]
fn test_display_name_strips_marker_and_suffix() {
    assert_eq!(Instrument::new("YESBANK.NS").display_name(), "YESBANK");
    assert_eq!(Instrument::new("^NSEI").display_name(), "NSEI");
    assert_eq!(Instrument::new("X").display_name(), "X");
}

#[test]
fn test_round_price() {
    assert_eq!(round_price(12.499), 12.5);
    assert_eq!(round_price(12.504), 12.5);
    assert_eq!(round_price(7.0), 7.0);
}

#[test]
fn test_round_price_ties_to_even() {
    assert_eq!(round_price(0.125), 0.12);
    assert_eq!(round_price(30.125), 30.12);
    assert_eq!(round_price(0.375), 0.38);
}

#[test]
fn test_format_price_keeps_one_decimal_for_whole_prices() {
    assert_eq!(format_price(12.0), "12.0");
    assert_eq!(format_price(30.0), "30.0");
    assert_eq!(format_price(12.5), "12.5");
    assert_eq!(format_price(48_123.45), "48123.45");
}

#[test]
fn test_alert_message_whole_price() {
    let ts = Utc.with_ymd_and_hms(2025, 1, 2, 6, 48, 0).unwrap();
    let signal = Signal::new(Instrument::new("YESBANK.NS"), SignalDirection::Buy, 12.0, ts);

    assert_eq!(
        signal.alert_message(9, &ist()),
        "🚀 <b>BUY ALERT: YESBANK</b>\nPrice: ₹12.0\nTime: 12:18\nLogic: EMA 9 Cross UP"
    );
}

#[test]
fn test_buy_alert_message() {
    // 06:48 UTC is 12:18 IST
    let ts = Utc.with_ymd_and_hms(2025, 1, 2, 6, 48, 0).unwrap();
    let signal = Signal::new(Instrument::new("X.NS"), SignalDirection::Buy, 12.5, ts);

    assert_eq!(
        signal.alert_message(9, &ist()),
        "🚀 <b>BUY ALERT: X</b>\nPrice: ₹12.5\nTime: 12:18\nLogic: EMA 9 Cross UP"
    );
}

#[test]
fn test_sell_alert_message() {
    let ts = Utc.with_ymd_and_hms(2025, 1, 2, 4, 5, 0).unwrap();
    let signal = Signal::new(Instrument::new("^NSEBANK"), SignalDirection::Sell, 48_123.45, ts);
    let message = signal.alert_message(9, &ist());

    assert!(message.starts_with("🔻 <b>SELL ALERT: NSEBANK</b>"));
    assert!(message.contains("Price: ₹48123.45"));
    assert!(message.contains("Time: 09:35"));
    assert!(message.ends_with("Logic: EMA 9 Cross DOWN"));
}
