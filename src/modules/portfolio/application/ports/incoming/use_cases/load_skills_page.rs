use async_trait::async_trait;

use crate::modules::portfolio::application::page_data::SkillsPageData;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Skills sorted by proficiency, then grouped by category.
#[async_trait]
pub trait LoadSkillsPageUseCase: Send + Sync {
    async fn execute(&self) -> SkillsPageData;
}
