use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upload error: {0}")]
    Ingest(#[from] ingest::IngestError),
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] analytics::PipelineError),
    #[error("Journal error: {0}")]
    Journal(#[from] journal::JournalError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Every variant is caused by what the user sent, so the message is returned
/// as-is for display.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Ingest(ingest_err) => {
                tracing::warn!(error = %ingest_err, "Upload could not be read.");
                (StatusCode::BAD_REQUEST, ingest_err.to_string())
            }
            AppError::Pipeline(pipeline_err) => {
                tracing::warn!(error = %pipeline_err, "Upload could not be processed.");
                (StatusCode::UNPROCESSABLE_ENTITY, pipeline_err.to_string())
            }
            AppError::Journal(journal_err) => (StatusCode::UNPROCESSABLE_ENTITY, journal_err.to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
