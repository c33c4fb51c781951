use actix_web::{get, web, HttpResponse};

use crate::modules::portfolio::adapter::incoming::web::views::{home_content, PageFrame};
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[get("/")]
pub async fn home_page_handler(data: web::Data<AppState>) -> HttpResponse {
    let (page, footer) = futures::join!(
        data.portfolio.home.execute(),
        data.portfolio.social_links.execute(),
    );

    HtmlResponse::ok(
        PageFrame::new("Home", "/", &data.site, &footer).render(home_content(&data.site, &page)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::modules::content::application::ports::outgoing::ContentClientError;
    use crate::modules::content::domain::Collection;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{failing_content, sample_content};

    #[actix_web::test]
    async fn test_home_page_renders_every_section() {
        let app_state = TestAppStateBuilder::default()
            .with_content(sample_content())
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(home_page_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Years Experience"));
        assert!(body.contains("ERP Platform"));
        assert!(body.contains("Career"));
        assert!(body.contains("AZ-204"));
        assert!(body.contains(r#"href="https://github.com/portfolio-owner""#));
    }

    #[actix_web::test]
    async fn test_home_page_survives_total_outage() {
        let app_state = TestAppStateBuilder::default()
            .with_content(failing_content(ContentClientError::Network(
                "connection refused".to_string(),
            )))
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(home_page_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Portfolio Owner"));
        assert!(!body.contains(r#"class="stat-card"#));
        assert!(!body.contains(r#"class="project-card"#));
    }

    #[actix_web::test]
    async fn test_home_page_keeps_other_sections_when_one_fails() {
        let app_state = TestAppStateBuilder::default()
            .with_content(sample_content().with_failure(Collection::Skills, ContentClientError::Unauthorized))
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(home_page_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(!body.contains(r#"class="skill-tile"#));
        assert!(body.contains("ERP Platform"));
    }
}
