pub mod mail_settings;
pub mod simulated_sender;
pub mod smtp_sender;

pub use mail_settings::{MailSettings, MailTransport};
pub use simulated_sender::SimulatedEmailSender;
pub use smtp_sender::SmtpEmailSender;
