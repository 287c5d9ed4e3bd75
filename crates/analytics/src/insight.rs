use crate::report::TradeSummary;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fixed advisory rule on the mean PnL per trade.
///
/// This is a single threshold comparison: a negative mean earns a caution,
/// anything else earns encouragement. Nothing is learned or configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    Caution,
    Encouraging,
    NoData,
}

impl Insight {
    pub fn from_summary(summary: &TradeSummary) -> Self {
        match summary.mean_pnl {
            Some(mean) if mean < Decimal::ZERO => Insight::Caution,
            Some(_) => Insight::Encouraging,
            None => Insight::NoData,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Insight::Caution => {
                "Your average trade is losing. Consider reducing trade frequency or reviewing entry signals."
            }
            Insight::Encouraging => "You're trading profitably! Focus on consistency and risk control.",
            Insight::NoData => "Upload trades to receive an insight.",
        }
    }
}

/// The insight paired with its message, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub insight: Insight,
    pub message: String,
}

impl From<Insight> for Advisory {
    fn from(insight: Insight) -> Self {
        Self {
            insight,
            message: insight.message().to_string(),
        }
    }
}
