use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{MeetingRepository, RepositoryError};
use crate::domain::{Meeting, MeetingId, MeetingSummary};

/// Meetings persisted in PostgreSQL. The decision and action-item lists are
/// stored as JSON-encoded text columns.
pub struct PgMeetingRepository {
    pool: PgPool,
}

impl PgMeetingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingRepository for PgMeetingRepository {
    #[instrument(skip(self, meeting), fields(meeting_id = %meeting.id.as_uuid()))]
    async fn create(&self, meeting: &Meeting) -> Result<(), RepositoryError> {
        let decisions = encode_list(&meeting.summary.decisions)?;
        let action_items = encode_list(&meeting.summary.action_items)?;

        sqlx::query(
            r#"
            INSERT INTO meetings (id, filename, transcript, summary, decisions, action_items, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(meeting.id.as_uuid())
        .bind(&meeting.filename)
        .bind(&meeting.transcript)
        .bind(&meeting.summary.summary)
        .bind(decisions)
        .bind(action_items)
        .bind(meeting.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(meeting_id = %id.as_uuid()))]
    async fn get_by_id(&self, id: MeetingId) -> Result<Option<Meeting>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, filename, transcript, summary, decisions, action_items, created_at
            FROM meetings
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(|r| meeting_from_row(&r)).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Meeting>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, filename, transcript, summary, decisions, action_items, created_at
            FROM meetings
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(meeting_from_row).collect()
    }
}

fn encode_list(items: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(items).map_err(|e| RepositoryError::QueryFailed(format!("encode: {}", e)))
}

/// Stored list columns may predate the current writer; malformed JSON
/// degrades to an empty list rather than failing the read.
fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn meeting_from_row(row: &PgRow) -> Result<Meeting, RepositoryError> {
    let id: Uuid = get_column(row, "id")?;
    let filename: String = get_column(row, "filename")?;
    let transcript: String = get_column(row, "transcript")?;
    let summary: String = get_column(row, "summary")?;
    let decisions: String = get_column(row, "decisions")?;
    let action_items: String = get_column(row, "action_items")?;
    let created_at: DateTime<Utc> = get_column(row, "created_at")?;

    Ok(Meeting {
        id: MeetingId::from_uuid(id),
        filename,
        transcript,
        summary: MeetingSummary {
            summary,
            decisions: decode_list(&decisions),
            action_items: decode_list(&action_items),
        },
        created_at,
    })
}

fn get_column<'r, T>(row: &'r PgRow, column: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| RepositoryError::QueryFailed(format!("{}: {}", column, e)))
}
