//! HTTP API server for persona-chat.

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use persona_chat_service::{AuthService, ChatService, PersonaService, TraitService};

pub use api_error::ApiError;

/// Shared application state for all HTTP handlers.
///
/// Holds the service instances, each already wired to the pooled store.
/// Wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    pub chats: ChatService,
    pub traits: TraitService,
    pub personas: PersonaService,
    pub auth: AuthService,
}

pub fn create_router(state: Arc<AppState>, allowed_origin: &str) -> Router {
    let cors = match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) if allowed_origin != "*" => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true),
        _ => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/personas/chats", post(handlers::chats::save_chat).get(handlers::chats::get_chats))
        .route("/api/personas/sessions", get(handlers::chats::get_sessions))
        .route("/api/personas/traits", get(handlers::personas::list_traits))
        .route("/api/personas/traits/{persona_id}", get(handlers::personas::get_traits))
        .route("/api/personas/store-persona", post(handlers::personas::store_persona))
        .route("/api/personas/{id}", get(handlers::personas::get_persona))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/forgot-password", post(handlers::auth::forgot_password))
        .route("/api/auth/reset-password", post(handlers::auth::reset_password))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
