use actix_web::{get, web, HttpResponse};

use crate::modules::portfolio::adapter::incoming::web::views::{certifications_content, PageFrame};
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[get("/certifications")]
pub async fn certifications_page_handler(data: web::Data<AppState>) -> HttpResponse {
    let (page, footer) = futures::join!(
        data.portfolio.certifications.execute(),
        data.portfolio.social_links.execute(),
    );

    HtmlResponse::ok(
        PageFrame::new("Certifications", "/certifications", &data.site, &footer)
            .render(certifications_content(&page)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_content;

    #[actix_web::test]
    async fn test_certifications_page_newest_first_undated_last() {
        let app_state = TestAppStateBuilder::default()
            .with_content(sample_content())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(certifications_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/certifications").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        let newest = body.find("AZ-204").unwrap();
        let older = body.find("OCA Java").unwrap();
        let undated = body.find("Scrum Basics").unwrap();
        assert!(newest < older && older < undated);
        assert!(body.contains("Issued June 2023"));
    }
}
