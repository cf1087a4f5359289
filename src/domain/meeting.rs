use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::MeetingSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeetingId(Uuid);

impl MeetingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MeetingId {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully processed meeting: the uploaded file's original name, the
/// transcript produced for it, and the derived summary. Immutable once
/// persisted.
#[derive(Debug, Clone)]
pub struct Meeting {
    pub id: MeetingId,
    pub filename: String,
    pub transcript: String,
    pub summary: MeetingSummary,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    pub fn new(filename: String, transcript: String, summary: MeetingSummary) -> Self {
        Self {
            id: MeetingId::new(),
            filename,
            transcript,
            summary,
            created_at: Utc::now(),
        }
    }
}
