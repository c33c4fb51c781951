use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::contact::adapter::incoming::web::views::{
    contact_content, ContactPageState, SUCCESS_RESET_SECS,
};
use crate::modules::portfolio::adapter::incoming::web::views::PageFrame;
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ContactPageQuery {
    pub sent: Option<String>,
}

/// The idle form, or the confirmation a successful post redirects to.
/// A `sent` value that is not a reference shows the idle form.
#[get("/contact")]
pub async fn contact_page_handler(
    query: web::Query<ContactPageQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let footer = data.portfolio.social_links.execute().await;
    let frame = PageFrame::new("Contact", "/contact", &data.site, &footer);

    let sent = query
        .sent
        .as_deref()
        .and_then(|reference| Uuid::parse_str(reference).ok());

    match sent {
        Some(reference) => HtmlResponse::ok(
            frame
                .refresh_after(SUCCESS_RESET_SECS, "/contact")
                .render(contact_content(&data.site, &ContactPageState::Sent { reference })),
        ),
        None => HtmlResponse::ok(frame.render(contact_content(&data.site, &ContactPageState::Idle))),
    }
}
