use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::MeetingSummary;

use super::heuristic_summarizer::HeuristicSummarizer;

/// Routes summarization through a primary (remote) summarizer; on quota
/// exhaustion the heuristic extractor answers instead. The heuristic path
/// cannot fail, so unlike transcription there is no error to suppress.
/// Non-quota failures propagate unchanged.
pub struct QuotaFallbackSummarizer {
    primary: Arc<dyn Summarizer>,
}

impl QuotaFallbackSummarizer {
    pub fn new(primary: Arc<dyn Summarizer>) -> Self {
        Self { primary }
    }
}

#[async_trait]
impl Summarizer for QuotaFallbackSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<MeetingSummary, SummarizerError> {
        match self.primary.summarize(transcript).await {
            Ok(summary) => Ok(summary),
            Err(e) if e.is_quota_exhausted() => {
                tracing::warn!(
                    error = %e,
                    "Remote summarization quota exhausted, using heuristic extraction"
                );
                Ok(HeuristicSummarizer::extract(transcript))
            }
            Err(e) => Err(e),
        }
    }
}
