use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use lume_quest::config::Settings;
use lume_quest::routes::{self, AppState};
use lume_quest::services::{DialogueGenerator, OfflineDialogue, ResponsesClient, SessionStore, Temperatures};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle path payload errors
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    init_logging();

    info!("Starting Lume Quest service...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let dialogue: Arc<dyn DialogueGenerator> = match ResponsesClient::from_settings(&settings.dialogue) {
        Ok(Some(client)) => {
            info!("Dialogue service enabled (model: {})", settings.dialogue.model);
            Arc::new(client)
        }
        Ok(None) => {
            warn!("No dialogue API key configured, serving deterministic fallbacks");
            Arc::new(OfflineDialogue)
        }
        Err(e) => {
            error!("Failed to build dialogue client ({}), serving deterministic fallbacks", e);
            Arc::new(OfflineDialogue)
        }
    };

    // Redis is optional - sessions stay in-process without it
    let session_settings = &settings.session;
    let sessions = match session_settings.redis_url.as_deref() {
        Some(url) => match SessionStore::new(Some(url), session_settings.l1_cache_size, session_settings.ttl_secs).await {
            Ok(store) => {
                info!(
                    "Session store initialized (L1: {} entries, TTL: {}s, Redis enabled)",
                    session_settings.l1_cache_size, session_settings.ttl_secs
                );
                store
            }
            Err(e) => {
                error!("Failed to connect to Redis ({}), keeping sessions in memory", e);
                SessionStore::in_memory(session_settings.l1_cache_size, session_settings.ttl_secs)
            }
        },
        None => {
            info!("Session store initialized in memory (L1: {} entries)", session_settings.l1_cache_size);
            SessionStore::in_memory(session_settings.l1_cache_size, session_settings.ttl_secs)
        }
    };

    let app_state = AppState {
        dialogue,
        sessions: Arc::new(sessions),
        temperatures: Temperatures::from(&settings.dialogue),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
