// src/shared/web/html_response.rs
use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use maud::Markup;

/// Rendered pages with the status that goes with them.
pub struct HtmlResponse;

impl HtmlResponse {
    pub fn page(status: StatusCode, markup: Markup) -> HttpResponse {
        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(markup.into_string())
    }

    pub fn ok(markup: Markup) -> HttpResponse {
        Self::page(StatusCode::OK, markup)
    }

    pub fn not_found(markup: Markup) -> HttpResponse {
        Self::page(StatusCode::NOT_FOUND, markup)
    }

    pub fn unprocessable(markup: Markup) -> HttpResponse {
        Self::page(StatusCode::UNPROCESSABLE_ENTITY, markup)
    }

    pub fn bad_gateway(markup: Markup) -> HttpResponse {
        Self::page(StatusCode::BAD_GATEWAY, markup)
    }

    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    /// Post/redirect/get: the browser follows up with a GET.
    pub fn see_other(location: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish()
    }
}
