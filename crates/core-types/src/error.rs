use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Line {line} has {found} fields but the header declares {expected}")]
    RowTooLong {
        line: usize,
        expected: usize,
        found: usize,
    },
}
