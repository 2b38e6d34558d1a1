//! Shared data models spanning the scanner layers.

pub mod indicators;
pub mod instrument;
pub mod signal;

pub use indicators::{Candle, IndicatorSeries};
pub use instrument::Instrument;
pub use signal::{format_price, round_price, Signal, SignalDirection};
