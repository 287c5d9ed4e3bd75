use core_types::Column;
use thiserror::Error;

/// Everything that can stop a single upload from producing a dashboard.
///
/// All variants are user-facing: they end the current upload only, and the
/// caller is expected to show the message and accept a new upload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("{}", describe_missing(.columns))]
    MissingColumn { columns: Vec<Column> },

    #[error("Line {line}: cannot read {column} value '{value}' as {expected}")]
    Computation {
        line: usize,
        column: Column,
        value: String,
        expected: &'static str,
    },

    #[error("Line {line}: {quantity} is too large to compute")]
    Overflow { line: usize, quantity: &'static str },
}

fn describe_missing(columns: &[Column]) -> String {
    match columns {
        [single] => format!("Your CSV must have a '{single}' column."),
        _ => {
            let names: Vec<&str> = columns.iter().map(Column::header).collect();
            format!("Your CSV must have the columns: {}.", names.join(", "))
        }
    }
}
