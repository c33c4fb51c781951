use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactReceipt, SubmitContactError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactRelay;
use crate::modules::contact::domain::ContactForm;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct SubmitContactMessageService<R>
where
    R: ContactRelay,
{
    relay: R,
}

impl<R> SubmitContactMessageService<R>
where
    R: ContactRelay,
{
    pub fn new(relay: R) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: ContactRelay + Send + Sync,
{
    async fn execute(&self, form: ContactForm) -> Result<ContactReceipt, SubmitContactError> {
        let message = form.validate()?;

        match self.relay.relay(&message).await {
            Ok(()) => {
                info!(reference = %message.reference, "Contact message relayed");
                Ok(ContactReceipt {
                    reference: message.reference,
                })
            }
            Err(err) => {
                error!(reference = %message.reference, "Failed to relay contact message: {}", err);
                Err(err.into())
            }
        }
    }
}
