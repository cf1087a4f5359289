use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::candle_whisper_engine::CandleWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;
use super::quota_fallback_engine::QuotaFallbackEngine;

/// Which transcription path to use, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProvider {
    Remote,
    LocalInference,
}

impl TryFrom<String> for TranscriptionProvider {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "remote" | "openai" => Ok(Self::Remote),
            "local-inference" | "local" => Ok(Self::LocalInference),
            other => Err(format!(
                "Invalid transcription provider: {}. Expected: remote or local-inference",
                other
            )),
        }
    }
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// The remote engine is always wrapped with the local-inference quota
    /// fallback; the local engine stays unloaded until the fallback fires.
    pub fn create(
        provider: TranscriptionProvider,
        remote_model: &str,
        local_model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            TranscriptionProvider::LocalInference => {
                Ok(Arc::new(CandleWhisperEngine::new(local_model)))
            }
            TranscriptionProvider::Remote => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::ModelLoadFailed(
                        "API key required for remote transcription".to_string(),
                    )
                })?;
                let remote = Arc::new(OpenAiWhisperEngine::new(
                    key,
                    base_url,
                    remote_model.to_string(),
                ));
                let local = Arc::new(CandleWhisperEngine::new(local_model));
                Ok(Arc::new(QuotaFallbackEngine::new(remote, local)))
            }
        }
    }
}
