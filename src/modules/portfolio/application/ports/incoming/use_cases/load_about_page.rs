use async_trait::async_trait;

use crate::modules::portfolio::application::page_data::AboutPageData;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadAboutPageUseCase: Send + Sync {
    async fn execute(&self) -> AboutPageData;
}
