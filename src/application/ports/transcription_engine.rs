use std::path::Path;

use async_trait::async_trait;

use super::quota;

/// Produces a transcript from an audio file on local storage.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio file unreadable: {0}")]
    FileUnreadable(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}

impl TranscriptionError {
    /// Whether this failure is a quota/billing exhaustion reported by the
    /// remote provider. Detection is textual: the provider only signals the
    /// condition through known phrases in the error body.
    pub fn is_quota_exhausted(&self) -> bool {
        quota::message_indicates_exhaustion(&self.to_string())
    }
}
