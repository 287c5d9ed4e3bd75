use crate::{AppState, error::AppError};
use analytics::Dashboard;
use axum::{Json, extract::State, http::StatusCode};
use journal::{JournalNote, NoteReceipt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub const IDLE_PROMPT: &str = "Please upload your trade history CSV to begin.";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub upload_id: Uuid,
    pub dashboard: Dashboard,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardView {
    Ready { dashboard: Dashboard },
    Idle { message: String },
}

#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub text: String,
}

/// # POST /api/uploads
/// Runs the pipeline over the CSV text in the request body. The result
/// replaces the session's dashboard; a failed upload clears it.
pub async fn upload_trades(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<UploadResponse>, AppError> {
    let upload_id = Uuid::new_v4();
    let span = tracing::info_span!("upload", %upload_id, bytes = body.len());

    let outcome = span.in_scope(|| -> Result<Dashboard, AppError> {
        let table = ingest::read_str(&body, &state.ingest)?;
        Ok(state.pipeline.run(&table)?)
    });

    let mut session = state.session.lock().await;
    match outcome {
        Ok(dashboard) => {
            session.dashboard = Some(dashboard.clone());
            Ok(Json(UploadResponse { upload_id, dashboard }))
        }
        Err(e) => {
            session.dashboard = None;
            Err(e)
        }
    }
}

/// # GET /api/dashboard
/// The dashboard of the latest successful upload, or the idle prompt.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let session = state.session.lock().await;
    let view = match &session.dashboard {
        Some(dashboard) => DashboardView::Ready {
            dashboard: dashboard.clone(),
        },
        None => DashboardView::Idle {
            message: IDLE_PROMPT.to_string(),
        },
    };
    Json(view)
}

/// # POST /api/notes
/// Accepts a journal note for this session only.
pub async fn submit_note(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NoteRequest>,
) -> Result<(StatusCode, Json<NoteReceipt>), AppError> {
    let receipt = state.session.lock().await.notes.submit(&request.text)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// # GET /api/notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Json<Vec<JournalNote>> {
    Json(state.session.lock().await.notes.notes().to_vec())
}
