use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Meeting, MeetingId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct MeetingResponse {
    pub id: String,
    pub filename: String,
    pub transcript: String,
    pub summary: String,
    pub decisions: Vec<String>,
    pub action_items: Vec<String>,
    pub created_at: String,
}

impl From<Meeting> for MeetingResponse {
    fn from(meeting: Meeting) -> Self {
        Self {
            id: meeting.id.as_uuid().to_string(),
            filename: meeting.filename,
            transcript: meeting.transcript,
            summary: meeting.summary.summary,
            decisions: meeting.summary.decisions,
            action_items: meeting.summary.action_items,
            created_at: meeting.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_meetings_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.meeting_service.list().await {
        Ok(meetings) => {
            let response: Vec<MeetingResponse> =
                meetings.into_iter().map(MeetingResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list meetings");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list meetings: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_meeting_handler(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&meeting_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid meeting ID: {}", meeting_id),
                }),
            )
                .into_response();
        }
    };

    match state.meeting_service.get(MeetingId::from_uuid(uuid)).await {
        Ok(Some(meeting)) => (StatusCode::OK, Json(MeetingResponse::from(meeting))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Meeting not found: {}", meeting_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch meeting");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch meeting: {}", e),
                }),
            )
                .into_response()
        }
    }
}
