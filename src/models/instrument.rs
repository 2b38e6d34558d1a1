use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbols starting with this marker are indices (`^NSEI`, `^NSEBANK`).
pub const INDEX_MARKER: char = '^';

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Indices are exempt from the price filter.
    pub fn is_index(&self) -> bool {
        self.symbol.starts_with(INDEX_MARKER)
    }

    /// Symbol without the index marker or exchange suffix, e.g.
    /// `YESBANK.NS` -> `YESBANK`, `^NSEI` -> `NSEI`.
    pub fn display_name(&self) -> &str {
        let bare = self.symbol.trim_start_matches(INDEX_MARKER);
        match bare.split_once('.') {
            Some((name, _suffix)) => name,
            None => bare,
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl From<&str> for Instrument {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}
