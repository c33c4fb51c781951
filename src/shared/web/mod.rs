pub mod form_config;
pub mod html_response;

pub use form_config::custom_form_config;
pub use html_response::HtmlResponse;
