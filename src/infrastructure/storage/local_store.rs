use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{AudioStore, AudioStoreError};

/// Uploaded audio staged on the local filesystem under a fixed base
/// directory, created at construction.
pub struct LocalAudioStore {
    base_path: PathBuf,
}

impl LocalAudioStore {
    pub fn new(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }
}

#[async_trait]
impl AudioStore for LocalAudioStore {
    async fn store(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, AudioStoreError> {
        let path = self.base_path.join(file_name);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AudioStoreError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Stored uploaded audio");

        Ok(path)
    }
}
