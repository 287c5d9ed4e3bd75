use analytics::{Dashboard, TradeMetricsPipeline};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use ingest::IngestOptions;
use journal::NoteBook;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// What the server remembers between requests: the latest dashboard and the
/// session's notes. Both live in memory and are gone when the process exits.
#[derive(Debug, Default)]
pub struct Session {
    pub dashboard: Option<Dashboard>,
    pub notes: NoteBook,
}

/// The shared application state that all handlers can access.
#[derive(Debug)]
pub struct AppState {
    pub pipeline: TradeMetricsPipeline,
    pub ingest: IngestOptions,
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(pipeline: TradeMetricsPipeline, ingest: IngestOptions) -> Self {
        Self {
            pipeline,
            ingest,
            session: Mutex::new(Session::default()),
        }
    }
}

/// Builds the application routes on top of `state`.
pub fn build_router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/uploads", post(handlers::upload_trades))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/notes", get(handlers::list_notes).post(handlers::submit_note))
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// The main function to configure and run the web server.
///
/// Tracing is expected to be initialized by the caller.
pub async fn run_server(addr: SocketAddr, state: AppState, max_upload_bytes: usize) -> anyhow::Result<()> {
    let app = build_router(Arc::new(state), max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
