use async_trait::async_trait;

use crate::modules::portfolio::application::page_data::ExperiencePageData;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadExperiencePageUseCase: Send + Sync {
    async fn execute(&self) -> ExperiencePageData;
}
