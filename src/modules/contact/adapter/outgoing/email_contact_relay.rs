use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use maud::html;

use crate::modules::contact::application::ports::outgoing::{ContactRelay, ContactRelayError};
use crate::modules::contact::domain::ContactMessage;
use crate::modules::email::application::ports::outgoing::email_sender::EmailSender;

/// Forwards contact messages to the owner's inbox as HTML email.
#[derive(Clone)]
pub struct EmailContactRelay {
    sender: Arc<dyn EmailSender + Send + Sync>,
    inbox: String,
}

impl fmt::Debug for EmailContactRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailContactRelay")
            .field("sender", &"<dyn EmailSender>")
            .field("inbox", &self.inbox)
            .finish()
    }
}

impl EmailContactRelay {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, inbox: &str) -> Self {
        Self {
            sender,
            inbox: inbox.to_string(),
        }
    }
}

pub fn subject_line(message: &ContactMessage) -> String {
    format!("[Portfolio] {}", message.subject)
}

/// Visitor input is escaped by the template.
pub fn body_html(message: &ContactMessage) -> String {
    html! {
        h2 { "New message from your portfolio" }
        table {
            tr { th { "From" } td { (message.name) } }
            tr { th { "Email" } td { a href=(format!("mailto:{}", message.email)) { (message.email) } } }
            tr { th { "Subject" } td { (message.subject) } }
            tr { th { "Received" } td { (message.received_at.format("%Y-%m-%d %H:%M UTC")) } }
            tr { th { "Reference" } td { (message.reference) } }
        }
        @for paragraph in message.message.lines() {
            p { (paragraph) }
        }
    }
    .into_string()
}

#[async_trait]
impl ContactRelay for EmailContactRelay {
    async fn relay(&self, message: &ContactMessage) -> Result<(), ContactRelayError> {
        self.sender
            .send_email(
                &self.inbox,
                Some(message.email.clone()),
                &subject_line(message),
                &body_html(message),
            )
            .await
            .map_err(ContactRelayError::Delivery)
    }
}
