use async_trait::async_trait;

use crate::modules::contact::domain::ContactMessage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactRelayError {
    #[error("Message could not be delivered: {0}")]
    Delivery(String),
}

/// Carries a contact message to the site owner.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn relay(&self, message: &ContactMessage) -> Result<(), ContactRelayError>;
}
