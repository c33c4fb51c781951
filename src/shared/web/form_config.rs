// src/shared/web/form_config.rs
use actix_web::{error::InternalError, web::FormConfig};

use crate::shared::web::HtmlResponse;

/// Form payloads that cannot be decoded at all are sent back to the idle
/// page instead of surfacing actix's plain-text error.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, req| {
            tracing::warn!(path = %req.path(), "Rejected form payload: {}", err);
            InternalError::from_response(err, HtmlResponse::see_other(req.path())).into()
        })
}
