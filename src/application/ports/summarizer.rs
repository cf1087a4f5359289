use async_trait::async_trait;

use crate::domain::MeetingSummary;

use super::quota;

/// Derives a structured summary from a meeting transcript.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<MeetingSummary, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl SummarizerError {
    /// See [`crate::application::ports::TranscriptionError::is_quota_exhausted`].
    pub fn is_quota_exhausted(&self) -> bool {
        quota::message_indicates_exhaustion(&self.to_string())
    }
}
