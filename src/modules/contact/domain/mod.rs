pub mod contact_message;

pub use contact_message::{ContactField, ContactForm, ContactMessage, ContactValidationError};
