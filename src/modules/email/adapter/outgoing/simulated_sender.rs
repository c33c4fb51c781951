use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::modules::email::application::ports::outgoing::email_sender::EmailSender;

pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Stands in for a real mail transport when none is configured: waits a
/// moment, logs the message and reports success.
#[derive(Debug, Clone)]
pub struct SimulatedEmailSender {
    delay: Duration,
}

impl Default for SimulatedEmailSender {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

impl SimulatedEmailSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl EmailSender for SimulatedEmailSender {
    async fn send_email(
        &self,
        to: &str,
        reply_to: Option<String>,
        subject: &str,
        _body: &str,
    ) -> Result<(), String> {
        tokio::time::sleep(self.delay).await;
        warn!(
            to,
            reply_to = reply_to.as_deref().unwrap_or("-"),
            subject,
            "No mail transport configured, message was not delivered"
        );
        Ok(())
    }
}
