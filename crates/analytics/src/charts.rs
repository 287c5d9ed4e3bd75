use crate::error::PipelineError;
use chrono::NaiveDate;
use core_types::DerivedTrade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of histogram bins when none is configured.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// One point of the equity curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub cumulative_pnl: Decimal,
}

/// Total PnL of one traded symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPnl {
    pub symbol: String,
    pub pnl: Decimal,
}

/// A fixed-width histogram bin. Bins are half-open except the last, which
/// also includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// A titled series ready to hand to a chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart<T> {
    pub title: String,
    pub points: Vec<T>,
}

impl<T> Chart<T> {
    fn new(title: &str, points: Vec<T>) -> Self {
        Self {
            title: title.to_string(),
            points,
        }
    }
}

/// The three chart series of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub equity_curve: Chart<EquityPoint>,
    pub symbol_pnl: Chart<SymbolPnl>,
    pub holding_histogram: Chart<HistogramBin>,
}

impl ChartSeries {
    pub fn from_trades(trades: &[DerivedTrade], histogram_bins: usize) -> Result<Self, PipelineError> {
        let holding: Vec<f64> = trades.iter().map(|t| t.holding_minutes).collect();
        Ok(Self {
            equity_curve: Chart::new("Equity Over Time", equity_curve(trades)),
            symbol_pnl: Chart::new("Symbol Performance", symbol_pnl(trades)?),
            holding_histogram: Chart::new(
                "Holding Time Histogram",
                holding_histogram(&holding, histogram_bins),
            ),
        })
    }
}

/// `(date, cumulative PnL)` pairs in the order the trades were derived.
pub fn equity_curve(trades: &[DerivedTrade]) -> Vec<EquityPoint> {
    trades
        .iter()
        .map(|t| EquityPoint {
            date: t.date,
            cumulative_pnl: t.cumulative_pnl,
        })
        .collect()
}

/// PnL summed per symbol, ascending by PnL. Equal totals keep symbol order.
///
/// A subtotal can overflow even when the running total does not; that is
/// reported against the line that pushed it out of range.
pub fn symbol_pnl(trades: &[DerivedTrade]) -> Result<Vec<SymbolPnl>, PipelineError> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for trade in trades {
        let entry = totals.entry(trade.symbol.as_str()).or_default();
        *entry = entry.checked_add(trade.pnl).ok_or(PipelineError::Overflow {
            line: trade.line,
            quantity: "Symbol PnL",
        })?;
    }

    let mut series: Vec<SymbolPnl> = totals
        .into_iter()
        .map(|(symbol, pnl)| SymbolPnl {
            symbol: symbol.to_string(),
            pnl,
        })
        .collect();
    series.sort_by(|a, b| a.pnl.cmp(&b.pnl));
    Ok(series)
}

/// Buckets `values` into `bins` equal-width bins spanning their min and max.
///
/// When every value is equal the range is widened by half a unit on each side.
/// Non-finite values are ignored; no values means no bins.
pub fn holding_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let bins = bins.max(1);
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let Some((mut min, mut max)) = finite.iter().fold(None, |acc: Option<(f64, f64)>, &v| {
        Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
    }) else {
        return Vec::new();
    };

    if min == max {
        min -= 0.5;
        max += 0.5;
    }
    let width = (max - min) / bins as f64;

    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for value in finite {
        let index = (((value - min) / width).floor() as usize).min(bins - 1);
        histogram[index].count += 1;
    }
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade(symbol: &str, pnl: Decimal, cumulative: Decimal, minutes: f64) -> DerivedTrade {
        trade_at(2, symbol, pnl, cumulative, minutes)
    }

    fn trade_at(line: usize, symbol: &str, pnl: Decimal, cumulative: Decimal, minutes: f64) -> DerivedTrade {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
        DerivedTrade {
            line,
            date: at.date(),
            symbol: symbol.into(),
            buy_price: dec!(1),
            sell_price: dec!(1),
            qty: dec!(1),
            entry_time: at,
            exit_time: at,
            pnl,
            holding_minutes: minutes,
            cumulative_pnl: cumulative,
        }
    }

    #[test]
    fn symbols_are_summed_and_sorted_ascending() {
        let trades = [
            trade("TCS", dec!(30), dec!(30), 1.0),
            trade("INFY", dec!(-20), dec!(10), 1.0),
            trade("TCS", dec!(-40), dec!(-30), 1.0),
            trade("HDFC", dec!(-10), dec!(-40), 1.0),
            trade("WIPRO", dec!(5), dec!(-35), 1.0),
        ];

        let series = symbol_pnl(&trades).unwrap();
        let pairs: Vec<(&str, Decimal)> = series.iter().map(|s| (s.symbol.as_str(), s.pnl)).collect();
        assert_eq!(
            pairs,
            [("INFY", dec!(-20)), ("HDFC", dec!(-10)), ("TCS", dec!(-10)), ("WIPRO", dec!(5))]
        );
    }

    #[test]
    fn symbol_subtotal_overflow_is_reported() {
        // The running total stays in range; only A's subtotal overflows.
        let trades = [
            trade_at(2, "A", Decimal::MAX, Decimal::MAX, 1.0),
            trade_at(3, "B", Decimal::MIN, Decimal::ZERO, 1.0),
            trade_at(4, "A", Decimal::MAX, Decimal::MAX, 1.0),
        ];

        let err = symbol_pnl(&trades).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Overflow {
                line: 4,
                quantity: "Symbol PnL"
            }
        );
        assert!(ChartSeries::from_trades(&trades, 30).is_err());
    }

    #[test]
    fn equity_curve_follows_trade_order() {
        let trades = [
            trade("A", dec!(10), dec!(10), 1.0),
            trade("B", dec!(-4), dec!(6), 1.0),
        ];
        let curve = equity_curve(&trades);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[1].cumulative_pnl, dec!(6));
    }

    #[test]
    fn histogram_spans_min_to_max() {
        let values: Vec<f64> = (0..=30).map(f64::from).collect();
        let bins = holding_histogram(&values, 30);

        assert_eq!(bins.len(), 30);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[29].upper, 30.0);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 31);
        // The maximum lands in the closed last bin.
        assert_eq!(bins[29].count, 2);
    }

    #[test]
    fn histogram_of_identical_values_is_widened() {
        let bins = holding_histogram(&[15.0, 15.0, 15.0], 2);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].lower, 14.5);
        assert_eq!(bins[1].upper, 15.5);
        assert_eq!(bins[1].count, 3);
    }

    #[test]
    fn histogram_of_nothing_is_empty() {
        assert!(holding_histogram(&[], 30).is_empty());
        assert!(holding_histogram(&[f64::NAN], 30).is_empty());
    }
}
