use actix_web::HttpResponse;
use tracing::debug;

use crate::shared::web::HtmlResponse;

/// Any path without a page of its own goes back to the home page.
pub async fn redirect_home(req: actix_web::HttpRequest) -> HttpResponse {
    debug!(path = req.path(), "No route matched, redirecting home");
    HtmlResponse::redirect("/")
}
