use crate::format::{format_currency, format_minutes, format_percent};
use core_types::DerivedTrade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The scalar metrics of one upload.
///
/// Metrics that divide by the trade count are `Option` so that an upload with
/// no usable rows reports "N/A" instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub win_rate_pct: Option<Decimal>, // None for 0 trades
    pub total_pnl: Decimal,
    pub mean_pnl: Option<Decimal>, // None for 0 trades
    pub average_holding_minutes: Option<f64>,
}

/// A labelled, display-ready metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
}

impl TradeSummary {
    /// Creates a new, zeroed-out summary: the result for an empty upload.
    pub fn new() -> Self {
        Self {
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            win_rate_pct: None,
            total_pnl: Decimal::ZERO,
            mean_pnl: None,
            average_holding_minutes: None,
        }
    }

    /// Computes the summary over the derived trades.
    pub fn from_trades(trades: &[DerivedTrade]) -> Self {
        let mut summary = Self::new();
        if trades.is_empty() {
            return summary;
        }

        let count = Decimal::from(trades.len());
        let mut holding_total = 0.0;
        for trade in trades {
            if trade.is_win() {
                summary.winning_trades += 1;
            } else if trade.pnl < Decimal::ZERO {
                summary.losing_trades += 1;
            }
            holding_total += trade.holding_minutes;
        }

        summary.total_trades = trades.len();
        // The running sum already holds the total and was overflow-checked.
        summary.total_pnl = trades.last().map_or(Decimal::ZERO, |t| t.cumulative_pnl);
        summary.mean_pnl = Some(summary.total_pnl / count);
        summary.win_rate_pct = Some(Decimal::from(summary.winning_trades) * Decimal::ONE_HUNDRED / count);
        summary.average_holding_minutes = Some(holding_total / trades.len() as f64);
        summary
    }

    pub fn has_trades(&self) -> bool {
        self.total_trades > 0
    }

    /// The four headline tiles: trade count, win rate, total PnL and average holding time.
    pub fn tiles(&self, currency_symbol: &str) -> Vec<MetricTile> {
        vec![
            tile("Total Trades", self.total_trades.to_string()),
            tile("Winning %", format_percent(self.win_rate_pct)),
            tile("Total PnL", format_currency(self.total_pnl, currency_symbol)),
            tile("Avg Holding Time", format_minutes(self.average_holding_minutes)),
        ]
    }
}

impl Default for TradeSummary {
    fn default() -> Self {
        Self::new()
    }
}

fn tile(label: &str, value: String) -> MetricTile {
    MetricTile {
        label: label.to_string(),
        value,
    }
}
