use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

/// Staging storage for uploaded audio, addressed by stored file name.
/// Returns the filesystem path the transcription engine can read from.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn store(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
