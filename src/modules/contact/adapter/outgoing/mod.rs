pub mod email_contact_relay;

pub use email_contact_relay::EmailContactRelay;
