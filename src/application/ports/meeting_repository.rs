use async_trait::async_trait;

use crate::domain::{Meeting, MeetingId};

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    async fn create(&self, meeting: &Meeting) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: MeetingId) -> Result<Option<Meeting>, RepositoryError>;

    /// All meetings, newest first.
    async fn list_all(&self) -> Result<Vec<Meeting>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
