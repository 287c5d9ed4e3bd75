use analytics::Dashboard;
use analytics::format::format_currency;
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use std::fmt;

/// Width of the longest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

/// A dashboard laid out for the terminal: headline tiles, the three chart
/// series as tables and the advisory.
pub struct TerminalDashboard<'a> {
    dashboard: &'a Dashboard,
    currency_symbol: &'a str,
}

impl<'a> TerminalDashboard<'a> {
    pub fn new(dashboard: &'a Dashboard, currency_symbol: &'a str) -> Self {
        Self {
            dashboard,
            currency_symbol,
        }
    }
}

impl fmt::Display for TerminalDashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashboard = self.dashboard;

        writeln!(f, "{}\n", dashboard.title)?;
        writeln!(f, "{}", tiles_table(dashboard))?;
        if dashboard.rows_dropped > 0 {
            writeln!(
                f,
                "{} of {} rows were skipped because they had missing values.",
                dashboard.rows_dropped, dashboard.rows_received
            )?;
        }

        if dashboard.summary.has_trades() {
            let charts = &dashboard.charts;
            writeln!(
                f,
                "\n{} ({} order)\n{}",
                charts.equity_curve.title,
                dashboard.equity_order,
                equity_table(dashboard, self.currency_symbol)
            )?;
            writeln!(
                f,
                "\n{}\n{}",
                charts.symbol_pnl.title,
                symbol_table(dashboard, self.currency_symbol)
            )?;
            writeln!(
                f,
                "\n{}\n{}",
                charts.holding_histogram.title,
                histogram_table(dashboard)
            )?;
        } else {
            writeln!(f, "\nNo complete trades to chart.")?;
        }

        writeln!(f, "\nInsight: {}", dashboard.advisory.message)
    }
}

fn tiles_table(dashboard: &Dashboard) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(dashboard.tiles.iter().map(|tile| tile.label.as_str()));
    table.add_row(
        dashboard
            .tiles
            .iter()
            .map(|tile| Cell::new(&tile.value).set_alignment(CellAlignment::Center)),
    );
    table
}

fn equity_table(dashboard: &Dashboard, currency_symbol: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Date", "Cumulative PnL"]);
    for point in &dashboard.charts.equity_curve.points {
        table.add_row(vec![
            Cell::new(point.date),
            Cell::new(format_currency(point.cumulative_pnl, currency_symbol))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn symbol_table(dashboard: &Dashboard, currency_symbol: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Symbol", "PnL"]);
    for row in &dashboard.charts.symbol_pnl.points {
        table.add_row(vec![
            Cell::new(&row.symbol),
            Cell::new(format_currency(row.pnl, currency_symbol)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn histogram_table(dashboard: &Dashboard) -> Table {
    let bins = &dashboard.charts.holding_histogram.points;
    let tallest = bins.iter().map(|bin| bin.count).max().unwrap_or(0);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Holding Time (mins)", "Trades", ""]);
    for bin in bins {
        table.add_row(vec![
            Cell::new(format!("{:.1} – {:.1}", bin.lower, bin.upper)),
            Cell::new(bin.count).set_alignment(CellAlignment::Right),
            Cell::new(bar(bin.count, tallest)),
        ]);
    }
    table
}

fn bar(count: usize, tallest: usize) -> String {
    if tallest == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(tallest);
    "█".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::TradeMetricsPipeline;
    use ingest::IngestOptions;

    fn render(dashboard: &Dashboard, currency_symbol: &str) -> String {
        TerminalDashboard::new(dashboard, currency_symbol).to_string()
    }

    fn dashboard(csv: &str) -> Dashboard {
        let table = ingest::read_str(csv, &IngestOptions::default()).unwrap();
        TradeMetricsPipeline::default().run(&table).unwrap()
    }

    #[test]
    fn renders_tiles_charts_and_insight() {
        let output = render(
            &dashboard(
                "Date,Symbol,Buy_Price,Sell_Price,Qty,Entry_Time,Exit_Time\n\
                 2024-01-02,INFY,100,110,10,09:15,09:45\n\
                 2024-01-03,TCS,50,40,5,10:00,11:00\n",
            ),
            "₹",
        );

        assert!(output.starts_with("Maverick – Your Trade Journal"));
        assert!(output.contains("Winning %"));
        assert!(output.contains("50.00%"));
        assert!(output.contains("Equity Over Time (input order)"));
        assert!(output.contains("₹100.00"));
        assert!(output.contains("₹-50.00"));
        assert!(output.contains("Symbol Performance"));
        assert!(output.contains("Holding Time Histogram"));
        assert!(output.contains("Insight: You're trading profitably!"));
    }

    #[test]
    fn empty_upload_shows_placeholders_without_charts() {
        let output = render(
            &dashboard(
                "Date,Symbol,Buy_Price,Sell_Price,Qty,Entry_Time,Exit_Time\n\
                 2024-01-02,INFY,100,110,,09:15,09:45\n",
            ),
            "₹",
        );

        assert!(output.contains("N/A"));
        assert!(output.contains("1 of 1 rows were skipped"));
        assert!(output.contains("No complete trades to chart."));
        assert!(!output.contains("Equity Over Time"));
    }

    #[test]
    fn bars_scale_to_the_tallest_bin() {
        assert_eq!(bar(4, 4).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1, 4).chars().count(), BAR_WIDTH / 4);
        assert_eq!(bar(0, 4), "");
        assert_eq!(bar(0, 0), "");
    }
}
