use std::sync::Arc;

use crate::application::ports::Summarizer;

use super::heuristic_summarizer::HeuristicSummarizer;
use super::openai_summarizer::OpenAiSummarizer;
use super::quota_fallback_summarizer::QuotaFallbackSummarizer;

/// Which summarization path to use, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizationProvider {
    Remote,
    Heuristic,
}

impl TryFrom<String> for SummarizationProvider {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "remote" | "openai" => Ok(Self::Remote),
            "heuristic" => Ok(Self::Heuristic),
            other => Err(format!(
                "Invalid summarization provider: {}. Expected: remote or heuristic",
                other
            )),
        }
    }
}

pub struct SummarizerFactory;

impl SummarizerFactory {
    pub fn create(
        provider: SummarizationProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn Summarizer>, SummarizerFactoryError> {
        match provider {
            SummarizationProvider::Heuristic => Ok(Arc::new(HeuristicSummarizer)),
            SummarizationProvider::Remote => {
                let key = api_key.ok_or(SummarizerFactoryError::MissingApiKey)?;
                let remote = Arc::new(OpenAiSummarizer::new(key, base_url, model.to_string()));
                Ok(Arc::new(QuotaFallbackSummarizer::new(remote)))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerFactoryError {
    #[error("API key required for remote summarization")]
    MissingApiKey,
}
