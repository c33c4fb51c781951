use async_trait::async_trait;

use crate::modules::portfolio::application::page_data::CertificationsPageData;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadCertificationsPageUseCase: Send + Sync {
    async fn execute(&self) -> CertificationsPageData;
}
