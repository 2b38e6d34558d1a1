//! EMA crossover market scanner.
//!
//! Polls intraday candles for a watchlist, computes fast/slow EMAs, looks for a
//! crossover in the last few completed candles and sends a Telegram alert.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
