use actix_web::{post, web, HttpResponse};
use tracing::warn;

use crate::modules::contact::adapter::incoming::web::views::{contact_content, ContactPageState};
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactError;
use crate::modules::contact::domain::ContactForm;
use crate::modules::portfolio::adapter::incoming::web::views::PageFrame;
use crate::shared::web::HtmlResponse;
use crate::AppState;

/// Handles the contact form post.
///
/// - 303 to `/contact?sent={reference}`, so a reload does not post again.
/// - 422 with the entered values kept and the first problem flagged.
/// - 502 with the entered values kept when the message could not be relayed.
#[post("/contact")]
pub async fn submit_contact_handler(
    form: web::Form<ContactForm>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let form = form.into_inner();
    let error = match data.submit_contact_message_use_case.execute(form.clone()).await {
        Ok(receipt) => {
            return HtmlResponse::see_other(&format!("/contact?sent={}", receipt.reference));
        }
        Err(error) => error,
    };

    let footer = data.portfolio.social_links.execute().await;
    let frame = PageFrame::new("Contact", "/contact", &data.site, &footer);

    match error {
        SubmitContactError::Invalid(error) => {
            warn!(field = error.field().as_str(), "Rejected contact form: {}", error);
            HtmlResponse::unprocessable(
                frame.render(contact_content(&data.site, &ContactPageState::Invalid { form, error })),
            )
        }
        SubmitContactError::RelayFailed(_) => HtmlResponse::bad_gateway(
            frame.render(contact_content(&data.site, &ContactPageState::Failed { form })),
        ),
    }
}
