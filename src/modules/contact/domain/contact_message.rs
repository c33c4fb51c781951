// src/modules/contact/domain/contact_message.rs
use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Deserialize;
use uuid::Uuid;

/// Raw form input as posted. Missing fields decode as empty strings so the
/// form can be re-rendered with whatever the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email Address",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("{} is required", .0.label())]
    MissingField(ContactField),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ContactValidationError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactValidationError::MissingField(field) => *field,
            ContactValidationError::InvalidEmail => ContactField::Email,
        }
    }
}

/// A validated message ready to be relayed to the site owner.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub reference: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, ContactValidationError> {
        let required = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Subject, &self.subject),
            (ContactField::Message, &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactValidationError::MissingField(*field));
        }

        let email = self.email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(ContactValidationError::InvalidEmail);
        }

        Ok(ContactMessage {
            reference: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            received_at: Utc::now(),
        })
    }
}
