//! # Maverick Core Types
//!
//! The shared vocabulary of the trade journal: the raw uploaded table, the
//! required column names and the typed trade records produced by the pipeline.
//! This crate has no knowledge of files, configuration or presentation.

pub mod enums;
pub mod error;
pub mod structs;
pub mod table;

// Re-export the core types to provide a clean public API.
pub use enums::{Column, EquityOrder};
pub use error::CoreError;
pub use structs::{CleanTrade, DerivedTrade};
pub use table::{RawRow, RawTable};
