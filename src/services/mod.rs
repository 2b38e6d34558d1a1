//! External collaborators: market data source and alert delivery.

pub mod market_data;
pub mod notifier;
pub mod telegram;
pub mod yahoo;

pub use market_data::{MarketDataProvider, StaticMarketDataProvider};
pub use notifier::{Notifier, RecordingNotifier};
pub use telegram::TelegramNotifier;
pub use yahoo::YahooFinanceProvider;
