use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// One data row of an uploaded file.
///
/// `line` is the 1-based line of the source text the row started on, kept so
/// that parse failures can point the user at the offending row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub line: usize,
    pub cells: Vec<Option<String>>,
}

impl RawRow {
    /// Returns the cell at `index`, or `None` if it is missing.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|cell| cell.as_deref())
    }

    /// True if any cell of the row is missing.
    pub fn has_missing(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }
}

/// An uploaded table before any typing: a header row plus string cells, with
/// missing values represented explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Short rows are padded with missing cells; rows wider than
    /// the header are rejected.
    pub fn push_row(&mut self, line: usize, mut cells: Vec<Option<String>>) -> Result<(), CoreError> {
        let expected = self.headers.len();
        if cells.len() > expected {
            return Err(CoreError::RowTooLong {
                line,
                expected,
                found: cells.len(),
            });
        }
        cells.resize(expected, None);
        self.rows.push(RawRow { line, cells });
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column whose header is exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
