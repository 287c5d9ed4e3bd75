use crate::error::PipelineError;
use crate::parse::{parse_date, parse_decimal};
use core_types::{CleanTrade, Column, RawRow, RawTable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The output of the cleaning stage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleanTable {
    pub trades: Vec<CleanTrade>,
    /// Data rows in the upload, before any were dropped.
    pub rows_received: usize,
    /// Rows dropped because at least one cell was missing.
    pub rows_dropped: usize,
}

/// Resolves the required columns against an uploaded header row.
struct ColumnIndex {
    positions: [usize; Column::REQUIRED.len()],
}

impl ColumnIndex {
    fn resolve(table: &RawTable) -> Result<Self, PipelineError> {
        let mut positions = [0; Column::REQUIRED.len()];
        let mut missing = Vec::new();

        for (slot, column) in positions.iter_mut().zip(Column::REQUIRED) {
            match table.column_index(column.header()) {
                Some(index) => *slot = index,
                None => missing.push(column),
            }
        }

        if !missing.is_empty() {
            return Err(PipelineError::MissingColumn { columns: missing });
        }
        Ok(Self { positions })
    }

    fn cell<'a>(&self, row: &'a RawRow, column: Column) -> &'a str {
        row.get(self.positions[column.position()]).unwrap_or_default()
    }

    fn decimal(&self, row: &RawRow, column: Column) -> Result<Decimal, PipelineError> {
        let text = self.cell(row, column);
        parse_decimal(text).ok_or_else(|| PipelineError::Computation {
            line: row.line,
            column,
            value: text.to_string(),
            expected: "a number",
        })
    }

    fn to_trade(&self, row: &RawRow) -> Result<CleanTrade, PipelineError> {
        let date_text = self.cell(row, Column::Date);
        let date = parse_date(date_text).ok_or_else(|| PipelineError::Computation {
            line: row.line,
            column: Column::Date,
            value: date_text.to_string(),
            expected: "a date",
        })?;

        Ok(CleanTrade {
            line: row.line,
            date,
            symbol: self.cell(row, Column::Symbol).to_string(),
            buy_price: self.decimal(row, Column::BuyPrice)?,
            sell_price: self.decimal(row, Column::SellPrice)?,
            qty: self.decimal(row, Column::Qty)?,
            entry_time: self.cell(row, Column::EntryTime).to_string(),
            exit_time: self.cell(row, Column::ExitTime).to_string(),
        })
    }
}

/// Validates the header, drops incomplete rows and types the remaining ones.
///
/// A row is dropped if ANY of its cells is missing, including cells in columns
/// the pipeline never reads. Missing required columns end the upload before
/// any row is looked at.
pub fn clean(table: &RawTable) -> Result<CleanTable, PipelineError> {
    let index = ColumnIndex::resolve(table)?;

    let mut trades = Vec::with_capacity(table.len());
    let mut rows_dropped = 0;
    for row in table.rows() {
        if row.has_missing() {
            tracing::debug!(line = row.line, "Dropping row with missing values.");
            rows_dropped += 1;
            continue;
        }
        trades.push(index.to_trade(row)?);
    }

    Ok(CleanTable {
        trades,
        rows_received: table.len(),
        rows_dropped,
    })
}
