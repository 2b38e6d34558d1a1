//! Market-hours and holiday gate, evaluated before anything is fetched.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use std::collections::BTreeSet;
use std::fmt;

use crate::config::ScannerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Open,
    Holiday,
    BeforeOpen,
    AfterClose,
}

impl GateDecision {
    pub fn is_open(self) -> bool {
        self == GateDecision::Open
    }
}

impl fmt::Display for GateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GateDecision::Open => "market open",
            GateDecision::Holiday => "holiday",
            GateDecision::BeforeOpen => "outside market hours",
            GateDecision::AfterClose => "market closed",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone)]
pub struct MarketGate {
    holidays: BTreeSet<NaiveDate>,
    open: NaiveTime,
    close: NaiveTime,
    tz: FixedOffset,
}

impl MarketGate {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            holidays: config.holidays.clone(),
            open: config.market_open,
            close: config.market_close,
            tz: config.utc_offset,
        }
    }

    /// Current time in the market's timezone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        chrono::Utc::now().with_timezone(&self.tz)
    }

    /// Both ends of the session are inclusive: 15:30:00 is open, 15:30:01 is not.
    pub fn evaluate<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> GateDecision {
        let local = now.with_timezone(&self.tz);

        if self.holidays.contains(&local.date_naive()) {
            return GateDecision::Holiday;
        }

        let time = local.time();
        if time < self.open {
            GateDecision::BeforeOpen
        } else if time > self.close {
            GateDecision::AfterClose
        } else {
            GateDecision::Open
        }
    }
}
