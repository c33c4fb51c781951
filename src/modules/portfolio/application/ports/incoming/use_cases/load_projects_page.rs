use async_trait::async_trait;

use crate::modules::portfolio::application::page_data::ProjectsPageData;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadProjectsPageUseCase: Send + Sync {
    async fn execute(&self) -> ProjectsPageData;
}
