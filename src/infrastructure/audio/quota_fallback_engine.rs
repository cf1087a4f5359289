use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Routes transcription through a primary (remote) engine, falling back to a
/// local engine only when the primary reports quota exhaustion.
///
/// If the fallback itself fails, its error is discarded and the primary's
/// error propagates: the caller always sees the first cause. Non-quota
/// failures propagate immediately without touching the fallback.
pub struct QuotaFallbackEngine {
    primary: Arc<dyn TranscriptionEngine>,
    fallback: Arc<dyn TranscriptionEngine>,
}

impl QuotaFallbackEngine {
    pub fn new(primary: Arc<dyn TranscriptionEngine>, fallback: Arc<dyn TranscriptionEngine>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl TranscriptionEngine for QuotaFallbackEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        let primary_err = match self.primary.transcribe(audio_path).await {
            Ok(transcript) => return Ok(transcript),
            Err(e) if e.is_quota_exhausted() => e,
            Err(e) => return Err(e),
        };

        tracing::warn!(
            error = %primary_err,
            "Remote transcription quota exhausted, falling back to local inference"
        );

        match self.fallback.transcribe(audio_path).await {
            Ok(transcript) => Ok(transcript),
            Err(fallback_err) => {
                tracing::error!(error = %fallback_err, "Local fallback transcription failed");
                Err(primary_err)
            }
        }
    }
}
