use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::ContactRelayError;
use crate::modules::contact::domain::{ContactForm, ContactValidationError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Invalid(#[from] ContactValidationError),

    #[error("Relay failed: {0}")]
    RelayFailed(String),
}

impl From<ContactRelayError> for SubmitContactError {
    fn from(err: ContactRelayError) -> Self {
        SubmitContactError::RelayFailed(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactReceipt {
    pub reference: Uuid,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<ContactReceipt, SubmitContactError>;
}
