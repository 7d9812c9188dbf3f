//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{AllowHeaders, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let audio_limit = state.config.server.max_body_size_audio_bytes;

    Router::new()
        // Liveness
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        // Speech-to-text
        .route(
            "/transcribe",
            post(handlers::transcribe::transcribe).layer(DefaultBodyLimit::max(audio_limit)),
        )
        // Text to spoken reply
        .route("/process_text", post(handlers::process_text::process_text))
        // Attach state
        .with_state(state)
}

/// Router with tracing and CORS layers applied
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server);

    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS restricted to the configured origins, with credentials allowed
///
/// An empty origin list allows any origin without credentials.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
