use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::email::adapter::outgoing::{SimulatedEmailSender, SmtpEmailSender};
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::shared::config::{optional_var, parse_var, required_var, var_or, ConfigError, ConfigLookup};

#[derive(Debug, Clone, PartialEq)]
pub enum MailTransport {
    Smtp {
        server: String,
        username: String,
        password: String,
    },
    /// Unauthenticated local catcher (Mailpit, MailHog, ...).
    Local { host: String, port: u16 },
    Simulated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailSettings {
    pub transport: MailTransport,
    pub from: String,
    /// Where contact messages are delivered.
    pub inbox: String,
}

impl MailSettings {
    /// - `RUST_ENV=test` with `SMTP_HOST` set: local catcher.
    /// - `SMTP_SERVER` set: authenticated relay, credentials required.
    /// - otherwise: simulated delivery.
    pub fn from_lookup(lookup: &impl ConfigLookup, fallback_address: &str) -> Result<Self, ConfigError> {
        let is_test = optional_var(lookup, "RUST_ENV").as_deref() == Some("test");

        let transport = match (optional_var(lookup, "SMTP_HOST"), optional_var(lookup, "SMTP_SERVER")) {
            (Some(host), _) if is_test => MailTransport::Local {
                host,
                port: parse_var(lookup, "SMTP_PORT", 1025u16)?,
            },
            (_, Some(server)) => MailTransport::Smtp {
                server,
                username: required_var(lookup, "SMTP_USERNAME")?,
                password: required_var(lookup, "SMTP_PASSWORD")?,
            },
            _ => MailTransport::Simulated,
        };

        Ok(Self {
            transport,
            from: var_or(lookup, "EMAIL_FROM", fallback_address),
            inbox: var_or(lookup, "CONTACT_INBOX", fallback_address),
        })
    }

    pub fn build_sender(&self) -> Result<Arc<dyn EmailSender + Send + Sync>, lettre::transport::smtp::Error> {
        let sender: Arc<dyn EmailSender + Send + Sync> = match &self.transport {
            MailTransport::Smtp {
                server,
                username,
                password,
            } => {
                info!(server = %server, "Using SMTP relay for contact messages");
                Arc::new(SmtpEmailSender::new(server, username, password, &self.from)?)
            }
            MailTransport::Local { host, port } => {
                info!(host = %host, port, "Using local SMTP catcher for contact messages");
                Arc::new(SmtpEmailSender::new_local(host, *port, &self.from))
            }
            MailTransport::Simulated => {
                warn!("SMTP_SERVER not set, contact messages will only be logged");
                Arc::new(SimulatedEmailSender::default())
            }
        };
        Ok(sender)
    }
}
