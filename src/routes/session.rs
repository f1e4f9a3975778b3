use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::models::{QuestSession, SessionWriteResponse};
use crate::routes::{error_response, AppState};

const MAX_SESSION_ID_LEN: usize = 128;

/// Configure session storage routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::post().to(create_session)).service(
        web::resource("/session/{id}")
            .route(web::get().to(read_session))
            .route(web::put().to(write_session))
            .route(web::delete().to(clear_session)),
    );
}

fn valid_session_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_SESSION_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn invalid_id(id: &str) -> HttpResponse {
    error_response(
        StatusCode::BAD_REQUEST,
        "Validation failed",
        format!("Invalid session id: {}", id),
    )
}

/// Start an empty session under a fresh id
///
/// POST /api/v1/session
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let id = Uuid::new_v4().to_string();

    match state.sessions.write(&id, &QuestSession::default()).await {
        Ok(key) => {
            tracing::info!("Created session {}", key);
            HttpResponse::Created().json(SessionWriteResponse { success: true, id, key })
        }
        Err(e) => {
            tracing::error!("Failed to create session: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session", e.to_string())
        }
    }
}

/// GET /api/v1/session/{id}
async fn read_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    if !valid_session_id(&id) {
        return invalid_id(&id);
    }

    match state.sessions.read(&id).await {
        Ok(Some(session)) => HttpResponse::Ok().json(session),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            "Not found",
            format!("No session stored for {}", id),
        ),
        Err(e) => {
            tracing::error!("Failed to read session {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read session", e.to_string())
        }
    }
}

/// Replace the whole session record
///
/// PUT /api/v1/session/{id}
async fn write_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<QuestSession>,
) -> impl Responder {
    let id = path.into_inner();
    if !valid_session_id(&id) {
        return invalid_id(&id);
    }

    match state.sessions.write(&id, &body).await {
        Ok(key) => {
            tracing::info!("Stored session {}", key);
            HttpResponse::Ok().json(SessionWriteResponse { success: true, id, key })
        }
        Err(e) => {
            tracing::error!("Failed to write session {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to write session", e.to_string())
        }
    }
}

/// DELETE /api/v1/session/{id}
async fn clear_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    if !valid_session_id(&id) {
        return invalid_id(&id);
    }

    match state.sessions.clear(&id).await {
        Ok(key) => HttpResponse::Ok().json(SessionWriteResponse { success: true, id, key }),
        Err(e) => {
            tracing::error!("Failed to clear session {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to clear session", e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_session_id() {
        assert!(valid_session_id("player-42_a"));
        assert!(!valid_session_id(""));
        assert!(!valid_session_id("a b"));
        assert!(!valid_session_id(&"x".repeat(129)));
    }
}
