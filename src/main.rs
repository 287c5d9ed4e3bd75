use analytics::{PipelineSettings, TradeMetricsPipeline};
use clap::{Parser, Subcommand};
use configuration::Settings;
use core_types::EquityOrder;
use ingest::IngestOptions;
use journal::NoteBook;
use std::net::IpAddr;
use std::path::PathBuf;
use uuid::Uuid;
use web_server::AppState;

mod render;
mod telemetry;

/// The main entry point for the Maverick trade journal.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load MAVERICK__* overrides from a .env file, if present, into the process environment.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = configuration::load_config(cli.config.as_deref())?;
    let _log_guard = telemetry::init(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, settings),
        Commands::Serve(args) => handle_serve(args, settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Turns a trade history CSV into a performance dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to load instead of ./maverick.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a CSV file and print the dashboard.
    Report(ReportArgs),
    /// Serve the dashboard API over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// The trade history to analyze (a .csv file).
    #[arg(long, short)]
    file: PathBuf,

    /// Accumulate the equity curve in upload order or by trade date.
    #[arg(long, value_enum)]
    equity_order: Option<EquityOrder>,

    /// Number of bins in the holding-time histogram.
    #[arg(long)]
    bins: Option<usize>,

    /// Print the dashboard as JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// A journal note to record alongside this report.
    #[arg(long)]
    note: Option<String>,
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to bind (e.g., "0.0.0.0").
    #[arg(long)]
    host: Option<IpAddr>,

    #[arg(long)]
    port: Option<u16>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Reads the file, runs the pipeline and prints the dashboard.
fn handle_report(args: ReportArgs, mut settings: Settings) -> anyhow::Result<()> {
    if let Some(order) = args.equity_order {
        settings.pipeline.equity_order = order;
    }
    if let Some(bins) = args.bins {
        settings.pipeline.histogram_bins = bins;
    }
    settings.validate()?;

    let upload_id = Uuid::new_v4();
    let span = tracing::info_span!("upload", %upload_id, file = %args.file.display());
    let _enter = span.enter();

    let table = ingest::read_file(&args.file, &ingest_options(&settings))?;
    let dashboard = build_pipeline(&settings).run(&table)?;

    let receipt = args
        .note
        .map(|text| NoteBook::new().submit(&text))
        .transpose()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        if let Some(receipt) = receipt {
            eprintln!("{}", receipt.message);
        }
    } else {
        print!(
            "{}",
            render::TerminalDashboard::new(&dashboard, &settings.display.currency_symbol)
        );
        if let Some(receipt) = receipt {
            println!("\n{}", receipt.message);
        }
    }

    Ok(())
}

/// Starts the HTTP API with a fresh, empty session.
async fn handle_serve(args: ServeArgs, mut settings: Settings) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    settings.validate()?;

    let state = AppState::new(build_pipeline(&settings), ingest_options(&settings));
    web_server::run_server(
        settings.server.socket_addr(),
        state,
        settings.server.max_upload_bytes,
    )
    .await
}

fn build_pipeline(settings: &Settings) -> TradeMetricsPipeline {
    TradeMetricsPipeline::new(PipelineSettings {
        equity_order: settings.pipeline.equity_order,
        histogram_bins: settings.pipeline.histogram_bins,
        currency_symbol: settings.display.currency_symbol.clone(),
    })
}

fn ingest_options(settings: &Settings) -> IngestOptions {
    IngestOptions {
        delimiter: settings.ingest.delimiter_byte(),
    }
}
