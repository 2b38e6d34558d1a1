use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::instrument::Instrument;

const CURRENCY: &str = "₹";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDirection {
    Buy,
    Sell,
}

impl SignalDirection {
    fn label(self) -> &'static str {
        match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            SignalDirection::Buy => "🚀",
            SignalDirection::Sell => "🔻",
        }
    }

    fn cross(self) -> &'static str {
        match self {
            SignalDirection::Buy => "UP",
            SignalDirection::Sell => "DOWN",
        }
    }
}

/// A crossover found by the scanner. Consumed by the notifier, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub instrument: Instrument,
    pub direction: SignalDirection,
    /// Close of the crossing candle, rounded to 2 decimals.
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    pub fn new(
        instrument: Instrument,
        direction: SignalDirection,
        price: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            instrument,
            direction,
            price,
            timestamp,
        }
    }

    /// Telegram HTML alert. Candle time is shown in the market's timezone.
    pub fn alert_message(&self, fast_period: usize, tz: &FixedOffset) -> String {
        let candle_time = self.timestamp.with_timezone(tz).format("%H:%M");
        format!(
            "{icon} <b>{label} ALERT: {name}</b>\nPrice: {CURRENCY}{price}\nTime: {candle_time}\nLogic: EMA {fast_period} Cross {cross}",
            icon = self.direction.icon(),
            label = self.direction.label(),
            name = self.instrument.display_name(),
            price = format_price(self.price),
            cross = self.direction.cross(),
        )
    }
}

/// Round to 2 decimal places, ties to even (`0.125` -> `0.12`).
pub fn round_price(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Whole prices keep one decimal place: `12.0` renders as `12.0`, not `12`.
pub fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        price.to_string()
    }
}
