use actix_web::{get, web, HttpResponse};

use crate::modules::portfolio::adapter::incoming::web::views::{
    project_detail_content, project_not_found_content, PageFrame, NOT_FOUND_TITLE,
};
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[get("/projects/{id}")]
pub async fn project_detail_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let project_id = path.into_inner();
    let (result, footer) = futures::join!(
        data.portfolio.project_detail.execute(&project_id),
        data.portfolio.social_links.execute(),
    );

    let current_path = format!("/projects/{project_id}");

    match result {
        Ok(project) => {
            let title = project.title.clone().unwrap_or_else(|| "Project".to_string());
            HtmlResponse::ok(
                PageFrame::new(&title, &current_path, &data.site, &footer)
                    .render(project_detail_content(&project)),
            )
        }
        Err(_) => HtmlResponse::not_found(
            PageFrame::new(NOT_FOUND_TITLE, &current_path, &data.site, &footer)
                .render(project_not_found_content()),
        ),
    }
}
