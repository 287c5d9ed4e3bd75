use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A trade row that survived cleaning.
///
/// The date and the numeric columns are typed; the entry and exit times are
/// still the uploaded text and are only parsed when the derived columns are
/// computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanTrade {
    pub line: usize,
    pub date: NaiveDate,
    pub symbol: String,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub qty: Decimal,
    pub entry_time: String,
    pub exit_time: String,
}

/// A fully typed trade with its derived columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTrade {
    pub line: usize,
    pub date: NaiveDate,
    pub symbol: String,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub qty: Decimal,
    pub entry_time: NaiveDateTime,
    pub exit_time: NaiveDateTime,
    /// `(sell_price - buy_price) * qty`
    pub pnl: Decimal,
    /// Exit minus entry in fractional minutes. Negative when the exit precedes the entry.
    pub holding_minutes: f64,
    /// Running sum of `pnl` up to and including this trade.
    pub cumulative_pnl: Decimal,
}

impl DerivedTrade {
    pub fn is_win(&self) -> bool {
        self.pnl > Decimal::ZERO
    }
}
