use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentClientError;
use crate::modules::content::domain::Project;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectDetailError {
    #[error("Project id is missing")]
    MissingId,

    #[error("Project not found")]
    NotFound,

    #[error("Project could not be loaded: {0}")]
    Unavailable(String),
}

impl From<ContentClientError> for ProjectDetailError {
    fn from(err: ContentClientError) -> Self {
        match err {
            ContentClientError::NotFound => ProjectDetailError::NotFound,
            other => ProjectDetailError::Unavailable(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadProjectDetailUseCase: Send + Sync {
    async fn execute(&self, project_id: &str) -> Result<Project, ProjectDetailError>;
}
