use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read upload {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file type for {0}; please upload a .csv file")]
    UnsupportedFileType(PathBuf),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed CSV: {0}")]
    Table(#[from] core_types::CoreError),

    #[error("The uploaded file is empty; a header row is required")]
    EmptyInput,
}
