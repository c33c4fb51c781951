use actix_web::{get, web, HttpResponse};

use crate::modules::portfolio::adapter::incoming::web::views::{experience_content, PageFrame};
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[get("/experience")]
pub async fn experience_page_handler(data: web::Data<AppState>) -> HttpResponse {
    let (page, footer) = futures::join!(
        data.portfolio.experience.execute(),
        data.portfolio.social_links.execute(),
    );

    HtmlResponse::ok(
        PageFrame::new("Experience", "/experience", &data.site, &footer)
            .render(experience_content(&page)),
    )
}
