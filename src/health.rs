use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::modules::content::application::ports::outgoing::ContentClient;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content_store: &'static str,
}

/// LIVENESS
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS
/// - Checks the content store answers
#[get("/ready")]
pub async fn readiness(content: web::Data<Arc<dyn ContentClient>>) -> impl Responder {
    match content.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content_store: "ok",
        }),
        Err(err) => {
            warn!("Content store is not ready: {}", err);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                content_store: "unhealthy",
            })
        }
    }
}
