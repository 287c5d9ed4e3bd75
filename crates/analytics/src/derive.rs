use crate::clean::CleanTable;
use crate::error::PipelineError;
use crate::parse::parse_timestamp;
use core_types::{CleanTrade, Column, DerivedTrade, EquityOrder};
use rust_decimal::Decimal;

/// Adds `pnl`, `holding_minutes` and `cumulative_pnl` to every cleaned trade.
///
/// With `EquityOrder::Input` the running sum follows upload order, so an
/// unsorted upload does not yield a chronological equity curve. With
/// `EquityOrder::Date` trades are stable-sorted by date first.
pub fn derive_columns(clean: &CleanTable, order: EquityOrder) -> Result<Vec<DerivedTrade>, PipelineError> {
    let mut trades = clean
        .trades
        .iter()
        .map(derive_trade)
        .collect::<Result<Vec<_>, _>>()?;

    if order == EquityOrder::Date {
        trades.sort_by_key(|t| t.date);
    }

    let mut running = Decimal::ZERO;
    for trade in &mut trades {
        running = running.checked_add(trade.pnl).ok_or(PipelineError::Overflow {
            line: trade.line,
            quantity: "Cumulative_PnL",
        })?;
        trade.cumulative_pnl = running;
    }

    Ok(trades)
}

fn derive_trade(trade: &CleanTrade) -> Result<DerivedTrade, PipelineError> {
    let entry_time = timestamp(trade, Column::EntryTime, &trade.entry_time)?;
    let exit_time = timestamp(trade, Column::ExitTime, &trade.exit_time)?;

    let pnl = trade
        .sell_price
        .checked_sub(trade.buy_price)
        .and_then(|spread| spread.checked_mul(trade.qty))
        .ok_or(PipelineError::Overflow {
            line: trade.line,
            quantity: "PnL",
        })?;

    let held = exit_time - entry_time;
    let holding_minutes = match held.num_microseconds() {
        Some(micros) => micros as f64 / 60_000_000.0,
        None => held.num_seconds() as f64 / 60.0,
    };

    Ok(DerivedTrade {
        line: trade.line,
        date: trade.date,
        symbol: trade.symbol.clone(),
        buy_price: trade.buy_price,
        sell_price: trade.sell_price,
        qty: trade.qty,
        entry_time,
        exit_time,
        pnl,
        holding_minutes,
        cumulative_pnl: Decimal::ZERO,
    })
}

fn timestamp(
    trade: &CleanTrade,
    column: Column,
    text: &str,
) -> Result<chrono::NaiveDateTime, PipelineError> {
    parse_timestamp(text, trade.date).ok_or_else(|| PipelineError::Computation {
        line: trade.line,
        column,
        value: text.to_string(),
        expected: "a timestamp",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn trade(line: usize, day: u32, buy: Decimal, sell: Decimal, qty: Decimal, entry: &str, exit: &str) -> CleanTrade {
        CleanTrade {
            line,
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            symbol: "INFY".into(),
            buy_price: buy,
            sell_price: sell,
            qty,
            entry_time: entry.into(),
            exit_time: exit.into(),
        }
    }

    fn table(trades: Vec<CleanTrade>) -> CleanTable {
        CleanTable {
            rows_received: trades.len(),
            rows_dropped: 0,
            trades,
        }
    }

    #[test]
    fn pnl_holding_time_and_running_total() {
        let derived = derive_columns(
            &table(vec![
                trade(2, 2, dec!(100), dec!(110), dec!(10), "09:15", "09:45"),
                trade(3, 3, dec!(50), dec!(40), dec!(5), "10:00", "10:00:30"),
            ]),
            EquityOrder::Input,
        )
        .unwrap();

        assert_eq!(derived[0].pnl, dec!(100));
        assert_eq!(derived[1].pnl, dec!(-50));
        assert_eq!(derived[0].holding_minutes, 30.0);
        assert_eq!(derived[1].holding_minutes, 0.5);
        assert_eq!(derived[0].cumulative_pnl, dec!(100));
        assert_eq!(derived[1].cumulative_pnl, dec!(50));
    }

    #[test]
    fn exit_before_entry_is_negative_not_rejected() {
        let derived = derive_columns(
            &table(vec![trade(2, 2, dec!(1), dec!(2), dec!(1), "10:00", "09:00")]),
            EquityOrder::Input,
        )
        .unwrap();
        assert_eq!(derived[0].holding_minutes, -60.0);
    }

    #[test]
    fn date_order_sorts_before_accumulating() {
        let trades = vec![
            trade(2, 9, dec!(10), dec!(20), dec!(1), "09:00", "09:10"),
            trade(3, 1, dec!(10), dec!(5), dec!(1), "09:00", "09:10"),
            trade(4, 9, dec!(10), dec!(11), dec!(1), "09:00", "09:10"),
        ];

        let by_input = derive_columns(&table(trades.clone()), EquityOrder::Input).unwrap();
        let lines: Vec<usize> = by_input.iter().map(|t| t.line).collect();
        assert_eq!(lines, [2, 3, 4]);
        assert_eq!(by_input[0].cumulative_pnl, dec!(10));

        let by_date = derive_columns(&table(trades), EquityOrder::Date).unwrap();
        let lines: Vec<usize> = by_date.iter().map(|t| t.line).collect();
        assert_eq!(lines, [3, 2, 4]);
        assert_eq!(by_date[0].cumulative_pnl, dec!(-5));
        assert_eq!(by_date[2].cumulative_pnl, dec!(6));
    }

    #[test]
    fn unreadable_timestamp_is_a_computation_error() {
        let err = derive_columns(
            &table(vec![trade(7, 2, dec!(1), dec!(2), dec!(1), "09:00", "later")]),
            EquityOrder::Input,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Computation { line: 7, column: Column::ExitTime, .. }
        ));
    }
}
