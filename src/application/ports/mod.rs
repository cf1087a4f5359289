mod audio_store;
mod meeting_repository;
mod quota;
mod summarizer;
mod transcription_engine;

pub use audio_store::{AudioStore, AudioStoreError};
pub use meeting_repository::{MeetingRepository, RepositoryError};
pub use summarizer::{Summarizer, SummarizerError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
