use actix_web::{get, web, HttpResponse};

use crate::modules::portfolio::adapter::incoming::web::views::{projects_content, PageFrame};
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[get("/projects")]
pub async fn projects_page_handler(data: web::Data<AppState>) -> HttpResponse {
    let (page, footer) = futures::join!(
        data.portfolio.projects.execute(),
        data.portfolio.social_links.execute(),
    );

    HtmlResponse::ok(
        PageFrame::new("Projects", "/projects", &data.site, &footer)
            .render(projects_content(&page)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_content;

    #[actix_web::test]
    async fn test_projects_page_lists_cards_in_store_order() {
        let app_state = TestAppStateBuilder::default()
            .with_content(sample_content())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(projects_page_handler)).await;

        let req = test::TestRequest::get().uri("/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        let erp = body.find("ERP Platform").unwrap();
        let assets = body.find("Asset Tracker").unwrap();
        assert!(erp < assets);
        assert!(body.contains(r#"href="/projects/proj-erp""#));
        assert!(body.contains("2+"));
    }
}
