use crate::error::IngestError;
use core_types::RawTable;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Cell values that mean "no value", matching what spreadsheet exports and
/// pandas-produced files emit for blanks.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// How the uploaded text is split into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// True if a trimmed cell represents a missing value.
pub fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

/// Reads a trade history from disk. Only `.csv` files are accepted.
pub fn read_file(path: &Path, options: &IngestOptions) -> Result<RawTable, IngestError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(IngestError::UnsupportedFileType(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Reading trade history file.");
    read_reader(file, options)
}

/// Reads a trade history that is already in memory.
pub fn read_str(text: &str, options: &IngestOptions) -> Result<RawTable, IngestError> {
    read_reader(text.as_bytes(), options)
}

/// Reads delimited text into a `RawTable`.
///
/// The first non-blank line is the header. Blank lines are skipped, cells are
/// trimmed, and missing-value tokens become `None`.
pub fn read_reader<R: Read>(reader: R, options: &IngestOptions) -> Result<RawTable, IngestError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::EmptyInput);
    }

    let mut table = RawTable::new(headers);
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        table.push_row(line, to_cells(&record))?;
    }

    tracing::debug!(
        columns = table.headers().len(),
        rows = table.len(),
        "Parsed uploaded table."
    );
    Ok(table)
}

fn to_cells(record: &StringRecord) -> Vec<Option<String>> {
    record
        .iter()
        .map(|field| {
            let trimmed = field.trim();
            if is_missing(trimmed) {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const HEADER: &str = "Date,Symbol,Buy_Price,Sell_Price,Qty,Entry_Time,Exit_Time";

    #[test]
    fn reads_header_and_rows_with_source_lines() {
        let text = format!(
            "{HEADER}\n2024-01-02,INFY,100,110,10,09:15,09:45\n\n2024-01-03,TCS,50,40,5,10:00,10:30\n"
        );
        let table = read_str(&text, &IngestOptions::default()).unwrap();

        assert_eq!(table.headers().len(), 7);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].line, 2);
        assert_eq!(table.rows()[1].line, 4);
        assert_eq!(table.rows()[1].get(1), Some("TCS"));
    }

    #[test]
    fn missing_tokens_become_none() {
        let text = format!("{HEADER}\n2024-01-02, INFY ,NaN,110,,09:15,N/A\n");
        let table = read_str(&text, &IngestOptions::default()).unwrap();
        let row = &table.rows()[0];

        assert_eq!(row.get(1), Some("INFY"));
        assert_eq!(row.get(2), None);
        assert_eq!(row.get(4), None);
        assert_eq!(row.get(6), None);
        assert!(row.has_missing());
    }

    #[test]
    fn quoted_fields_keep_embedded_delimiters() {
        let text = "Symbol,Note\n\"NIFTY, weekly\",ok\n";
        let table = read_str(text, &IngestOptions::default()).unwrap();
        assert_eq!(table.rows()[0].get(0), Some("NIFTY, weekly"));
    }

    #[test]
    fn custom_delimiter_is_honoured() {
        let text = "Date;Symbol\n2024-01-02;INFY\n";
        let table = read_str(text, &IngestOptions { delimiter: b';' }).unwrap();
        assert_eq!(table.column_index("Symbol"), Some(1));
        assert_eq!(table.rows()[0].get(1), Some("INFY"));
    }

    #[test]
    fn short_rows_are_padded_and_wide_rows_fail() {
        let table = read_str("A,B,C\n1,2\n", &IngestOptions::default()).unwrap();
        assert_eq!(table.rows()[0].get(2), None);

        let err = read_str("A,B\n1,2,3\n", &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::Table(_)));
    }

    #[test]
    fn empty_upload_is_rejected() {
        let err = read_str("", &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyInput));
    }

    #[test]
    fn only_csv_files_are_accepted() {
        let err = read_file(&PathBuf::from("trades.xlsx"), &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFileType(_)));

        let err = read_file(&PathBuf::from("/nonexistent/trades.CSV"), &IngestOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
