use async_trait::async_trait;

use crate::modules::portfolio::application::page_data::HomePageData;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Fetch failures degrade to empty sections; never fails.
#[async_trait]
pub trait LoadHomePageUseCase: Send + Sync {
    async fn execute(&self) -> HomePageData;
}
