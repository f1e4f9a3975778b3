// Route exports
pub mod dialogue;
pub mod profile;
pub mod quest;
pub mod session;

use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{DialogueGenerator, SessionStore, Temperatures};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dialogue: Arc<dyn DialogueGenerator>,
    pub sessions: Arc<SessionStore>,
    pub temperatures: Temperatures,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(profile::configure)
            .configure(dialogue::configure)
            .configure(quest::configure)
            .configure(session::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dialogue: state.dialogue.model_name().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string())
}

pub(crate) fn missing_fields(message: &str) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Missing fields", message)
}
