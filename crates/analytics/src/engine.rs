use crate::charts::{ChartSeries, DEFAULT_HISTOGRAM_BINS};
use crate::clean::{self, CleanTable};
use crate::derive;
use crate::error::PipelineError;
use crate::insight::{Advisory, Insight};
use crate::report::{MetricTile, TradeSummary};
use core_types::{DerivedTrade, EquityOrder, RawTable};
use serde::{Deserialize, Serialize};

pub const DASHBOARD_TITLE: &str = "Maverick – Your Trade Journal";

/// Knobs of the pipeline. Everything else is fixed behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSettings {
    pub equity_order: EquityOrder,
    pub histogram_bins: usize,
    pub currency_symbol: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            equity_order: EquityOrder::Input,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Everything the presentation layer needs to render one upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    /// The order the equity curve was accumulated in, shown to the user.
    pub equity_order: EquityOrder,
    pub rows_received: usize,
    pub rows_dropped: usize,
    pub summary: TradeSummary,
    pub tiles: Vec<MetricTile>,
    pub charts: ChartSeries,
    pub advisory: Advisory,
    pub trades: Vec<DerivedTrade>,
}

/// A stateless calculator that turns an uploaded table into a `Dashboard`.
///
/// Each stage is exposed on its own so callers and tests can stop early; `run`
/// chains them and short-circuits on the first error.
#[derive(Debug, Clone, Default)]
pub struct TradeMetricsPipeline {
    settings: PipelineSettings,
}

impl TradeMetricsPipeline {
    pub fn new(settings: PipelineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// The main entry point: clean, derive, summarize, aggregate and advise.
    ///
    /// # Arguments
    ///
    /// * `table` - The uploaded table, header and raw cells.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Dashboard` or the `PipelineError` that ended the upload.
    pub fn run(&self, table: &RawTable) -> Result<Dashboard, PipelineError> {
        let cleaned = self.clean(table)?;
        let trades = self.derive_columns(&cleaned)?;
        let summary = self.summarize(&trades);
        let charts = self.aggregates(&trades)?;
        let advisory = Advisory::from(self.insight(&summary));

        tracing::info!(
            rows_received = cleaned.rows_received,
            rows_dropped = cleaned.rows_dropped,
            trades = summary.total_trades,
            equity_order = %self.settings.equity_order,
            "Trade metrics computed."
        );

        Ok(Dashboard {
            title: DASHBOARD_TITLE.to_string(),
            equity_order: self.settings.equity_order,
            rows_received: cleaned.rows_received,
            rows_dropped: cleaned.rows_dropped,
            tiles: summary.tiles(&self.settings.currency_symbol),
            summary,
            charts,
            advisory,
            trades,
        })
    }

    /// Checks the required columns, drops incomplete rows and types the rest.
    pub fn clean(&self, table: &RawTable) -> Result<CleanTable, PipelineError> {
        clean::clean(table).inspect_err(|e| tracing::warn!(error = %e, "Upload rejected during cleaning."))
    }

    /// Parses entry/exit times and adds PnL, holding time and cumulative PnL.
    pub fn derive_columns(&self, cleaned: &CleanTable) -> Result<Vec<DerivedTrade>, PipelineError> {
        derive::derive_columns(cleaned, self.settings.equity_order)
            .inspect_err(|e| tracing::warn!(error = %e, "Upload rejected while deriving columns."))
    }

    pub fn summarize(&self, trades: &[DerivedTrade]) -> TradeSummary {
        TradeSummary::from_trades(trades)
    }

    /// Equity curve, per-symbol PnL and the holding-time histogram.
    pub fn aggregates(&self, trades: &[DerivedTrade]) -> Result<ChartSeries, PipelineError> {
        ChartSeries::from_trades(trades, self.settings.histogram_bins)
            .inspect_err(|e| tracing::warn!(error = %e, "Upload rejected while aggregating."))
    }

    pub fn insight(&self, summary: &TradeSummary) -> Insight {
        Insight::from_summary(summary)
    }
}
