use actix_web::{get, web, HttpResponse};

use crate::modules::portfolio::adapter::incoming::web::views::{skills_content, PageFrame};
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[get("/skills")]
pub async fn skills_page_handler(data: web::Data<AppState>) -> HttpResponse {
    let (page, footer) = futures::join!(
        data.portfolio.skills.execute(),
        data.portfolio.social_links.execute(),
    );

    HtmlResponse::ok(
        PageFrame::new("Skills", "/skills", &data.site, &footer).render(skills_content(&page)),
    )
}
