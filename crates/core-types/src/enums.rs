use serde::{Deserialize, Serialize};
use std::fmt;

/// The columns every uploaded trade file must provide.
///
/// Discriminants are the column's slot in `Column::REQUIRED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Date = 0,
    Symbol = 1,
    BuyPrice = 2,
    SellPrice = 3,
    Qty = 4,
    EntryTime = 5,
    ExitTime = 6,
}

impl Column {
    /// All required columns, in the order they are reported when missing.
    pub const REQUIRED: [Column; 7] = [
        Column::Date,
        Column::Symbol,
        Column::BuyPrice,
        Column::SellPrice,
        Column::Qty,
        Column::EntryTime,
        Column::ExitTime,
    ];

    /// Index of this column within `REQUIRED`.
    pub fn position(self) -> usize {
        self as usize
    }

    /// The exact header text expected in the uploaded file.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Symbol => "Symbol",
            Column::BuyPrice => "Buy_Price",
            Column::SellPrice => "Sell_Price",
            Column::Qty => "Qty",
            Column::EntryTime => "Entry_Time",
            Column::ExitTime => "Exit_Time",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// The record order used when accumulating the equity curve.
///
/// `Input` keeps the rows exactly as uploaded, so an unsorted file produces a
/// running total that is not a true equity curve. `Date` stable-sorts the
/// records by trade date first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EquityOrder {
    #[default]
    Input,
    Date,
}

impl fmt::Display for EquityOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquityOrder::Input => f.write_str("input"),
            EquityOrder::Date => f.write_str("date"),
        }
    }
}
