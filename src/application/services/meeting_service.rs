use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{
    AudioStore, AudioStoreError, MeetingRepository, RepositoryError, Summarizer, SummarizerError,
    TranscriptionEngine, TranscriptionError,
};
use crate::domain::{AudioFormat, Meeting, MeetingId};

/// Orchestrates the upload pipeline: stage the audio file, transcribe it,
/// summarize the transcript, persist the meeting. One synchronous call
/// chain per request.
pub struct MeetingService {
    audio_store: Arc<dyn AudioStore>,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    summarizer: Arc<dyn Summarizer>,
    meeting_repository: Arc<dyn MeetingRepository>,
}

impl MeetingService {
    pub fn new(
        audio_store: Arc<dyn AudioStore>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        summarizer: Arc<dyn Summarizer>,
        meeting_repository: Arc<dyn MeetingRepository>,
    ) -> Self {
        Self {
            audio_store,
            transcription_engine,
            summarizer,
            meeting_repository,
        }
    }

    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    pub async fn ingest(&self, filename: &str, data: &[u8]) -> Result<Meeting, IngestionError> {
        let format = AudioFormat::from_filename(filename)
            .ok_or_else(|| IngestionError::UnsupportedFormat(filename.to_string()))?;

        let stored_name = format!("{}.{}", Uuid::new_v4(), format.extension());
        let audio_path = self.audio_store.store(&stored_name, data).await?;
        tracing::debug!(path = %audio_path.display(), "Audio upload staged");

        let transcript = self.transcription_engine.transcribe(&audio_path).await?;
        tracing::info!(chars = transcript.len(), "Transcription completed");

        let summary = self.summarizer.summarize(&transcript).await?;

        let meeting = Meeting::new(filename.to_string(), transcript, summary);
        self.meeting_repository.create(&meeting).await?;

        tracing::info!(
            meeting_id = %meeting.id.as_uuid(),
            decisions = meeting.summary.decisions.len(),
            action_items = meeting.summary.action_items.len(),
            "Meeting ingested"
        );

        Ok(meeting)
    }

    pub async fn get(&self, id: MeetingId) -> Result<Option<Meeting>, RepositoryError> {
        self.meeting_repository.get_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<Meeting>, RepositoryError> {
        self.meeting_repository.list_all().await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("storage: {0}")]
    Storage(#[from] AudioStoreError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("summarization: {0}")]
    Summarization(#[from] SummarizerError),
    #[error("persistence: {0}")]
    Persistence(#[from] RepositoryError),
}
