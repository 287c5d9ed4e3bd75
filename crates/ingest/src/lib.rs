//! # Maverick Ingest
//!
//! Turns an uploaded trade history into a `RawTable`.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** This crate is the only place that knows about the delimited
//!   text format. The rest of the system sees a header row and string cells.
//! - **No typing:** Cells are trimmed and missing-value tokens are recognised,
//!   but nothing is parsed into dates or numbers here. Typing belongs to the
//!   analytics pipeline, which reports parse failures with the source line.
//!
//! ## Public API
//!
//! - `read_file`: reads a `.csv` file from disk.
//! - `read_str` / `read_reader`: read already-uploaded text.
//! - `IngestOptions`: the delimiter to split on.
//! - `IngestError`: the specific error types that can be returned from this crate.

pub mod error;
pub mod reader;

pub use error::IngestError;
pub use reader::{IngestOptions, is_missing, read_file, read_reader, read_str};
