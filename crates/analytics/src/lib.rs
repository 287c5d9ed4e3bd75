//! # Maverick Analytics
//!
//! The trade metrics pipeline: it takes an uploaded table and produces the
//! cleaned trades, their derived columns, the headline metrics, the chart
//! series and a rule-based advisory.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** This crate has no knowledge of files, HTTP or terminals.
//!   It depends only on `core-types`.
//! - **Stateless calculation:** `TradeMetricsPipeline` holds settings only.
//!   Running it twice on the same table yields the same `Dashboard`.
//! - **Short-circuit on bad input:** a missing column or an unreadable value
//!   ends the upload with a `PipelineError` before anything is derived from it.
//!
//! ## Public API
//!
//! - `TradeMetricsPipeline`: clean → derive → summarize → aggregate → insight.
//! - `Dashboard`: the complete, serializable result of one upload.
//! - `TradeSummary`, `ChartSeries`, `Insight`: the individual outputs.
//! - `PipelineError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod charts;
pub mod clean;
pub mod derive;
pub mod engine;
pub mod error;
pub mod format;
pub mod insight;
pub mod parse;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use charts::{Chart, ChartSeries, EquityPoint, HistogramBin, SymbolPnl};
pub use clean::CleanTable;
pub use engine::{DASHBOARD_TITLE, Dashboard, PipelineSettings, TradeMetricsPipeline};
pub use error::PipelineError;
pub use insight::{Advisory, Insight};
pub use report::{MetricTile, TradeSummary};
