use async_trait::async_trait;

use crate::modules::portfolio::application::page_data::FooterData;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Backs the footer rendered on every page.
#[async_trait]
pub trait LoadSocialLinksUseCase: Send + Sync {
    async fn execute(&self) -> FooterData;
}
