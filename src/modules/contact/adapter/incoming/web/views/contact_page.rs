use maud::{html, Markup};
use uuid::Uuid;

use crate::modules::contact::domain::{ContactField, ContactForm, ContactValidationError};
use crate::modules::portfolio::adapter::incoming::web::views::components::page_header;
use crate::shared::site_profile::SiteProfile;

/// Seconds the success banner stays before the form returns to idle.
pub const SUCCESS_RESET_SECS: u32 = 5;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum ContactPageState {
    Idle,
    Invalid {
        form: ContactForm,
        error: ContactValidationError,
    },
    Sent {
        reference: Uuid,
    },
    Failed {
        form: ContactForm,
    },
}

impl ContactPageState {
    fn form(&self) -> Option<&ContactForm> {
        match self {
            ContactPageState::Invalid { form, .. } | ContactPageState::Failed { form } => Some(form),
            ContactPageState::Idle | ContactPageState::Sent { .. } => None,
        }
    }

    fn field_error(&self, field: ContactField) -> Option<String> {
        match self {
            ContactPageState::Invalid { error, .. } if error.field() == field => {
                Some(error.to_string())
            }
            _ => None,
        }
    }
}

pub fn contact_content(site: &SiteProfile, state: &ContactPageState) -> Markup {
    let empty = ContactForm::default();
    let form = state.form().unwrap_or(&empty);

    html! {
        (page_header(
            "Get In Touch",
            "Have a project in mind or want to discuss opportunities? Send a message and expect a reply as soon as possible.",
        ))
        div.contact-layout {
            section.panel.contact-form-panel {
                h2 { "Send a Message" }
                form.contact-form method="post" action="/contact" {
                    (text_field(state, ContactField::Name, "text", &form.name, "John Doe"))
                    (text_field(state, ContactField::Email, "email", &form.email, "john@example.com"))
                    (text_field(state, ContactField::Subject, "text", &form.subject, "Project Inquiry"))
                    div.field {
                        label for="message" { (ContactField::Message.label()) }
                        textarea id="message" name="message" rows="6" required
                            placeholder="Tell me about your project or inquiry..." { (form.message) }
                        @if let Some(err) = state.field_error(ContactField::Message) {
                            p.field-error { (err) }
                        }
                    }
                    button.button.primary type="submit" { "Send Message" }
                }
                @match state {
                    ContactPageState::Sent { reference } => {
                        div.banner.success role="status" {
                            p { (SUCCESS_MESSAGE) }
                            p.reference { "Reference: " (reference) }
                        }
                    }
                    ContactPageState::Failed { .. } => {
                        div.banner.error role="alert" { (ERROR_MESSAGE) }
                    }
                    _ => {}
                }
            }
            aside.contact-info {
                section.panel {
                    h2 { "Contact Information" }
                    div.info-row {
                        span.info-label { "Email" }
                        a href=(format!("mailto:{}", site.owner_email)) { (site.owner_email) }
                    }
                    div.info-row {
                        span.info-label { "Location" }
                        span { (site.location) }
                    }
                }
                section.panel.open-to-work {
                    h2 { "Let's Work Together" }
                    p {
                        "Currently open to new opportunities and exciting projects, whether "
                        "that is joining a team or a freelance engagement."
                    }
                    p.available { span.pulse {} "Available for new projects" }
                }
            }
        }
    }
}

fn text_field(
    state: &ContactPageState,
    field: ContactField,
    input_type: &str,
    value: &str,
    placeholder: &str,
) -> Markup {
    let error = state.field_error(field);
    html! {
        div.field {
            label for=(field.as_str()) { (field.label()) }
            input id=(field.as_str()) name=(field.as_str()) type=(input_type) value=(value)
                placeholder=(placeholder) required
                aria-invalid=[error.is_some().then_some("true")];
            @if let Some(err) = error {
                p.field-error { (err) }
            }
        }
    }
}
