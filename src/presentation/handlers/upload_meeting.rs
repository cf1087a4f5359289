use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::services::IngestionError;
use crate::presentation::state::AppState;

use super::meetings::MeetingResponse;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_meeting_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = match field.file_name() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing filename".to_string(),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing meeting upload");

    match state.meeting_service.ingest(&filename, &data).await {
        Ok(meeting) => (StatusCode::OK, Json(MeetingResponse::from(meeting))).into_response(),
        Err(e) => ingestion_error_response(e),
    }
}

fn ingestion_error_response(error: IngestionError) -> axum::response::Response {
    let (status, message) = match &error {
        IngestionError::UnsupportedFormat(filename) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Unsupported audio format: {}", filename),
        ),
        IngestionError::Transcription(e) => (
            StatusCode::BAD_GATEWAY,
            format!("Transcription failed: {}", e),
        ),
        IngestionError::Summarization(e) => (
            StatusCode::BAD_GATEWAY,
            format!("Summarization failed: {}", e),
        ),
        IngestionError::Storage(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to store upload: {}", e),
        ),
        IngestionError::Persistence(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to persist meeting: {}", e),
        ),
    };

    tracing::error!(error = %error, status = %status, "Meeting ingestion failed");

    (status, Json(ErrorResponse { error: message })).into_response()
}
