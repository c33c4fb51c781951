use actix_web::{get, web, HttpResponse};

use crate::modules::portfolio::adapter::incoming::web::views::{about_content, PageFrame};
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[get("/about")]
pub async fn about_page_handler(data: web::Data<AppState>) -> HttpResponse {
    let (page, footer) = futures::join!(
        data.portfolio.about.execute(),
        data.portfolio.social_links.execute(),
    );

    HtmlResponse::ok(PageFrame::new("About", "/about", &data.site, &footer).render(about_content(&page)))
}
