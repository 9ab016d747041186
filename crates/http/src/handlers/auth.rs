use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use persona_chat_service::ServiceError;

use crate::api_error::ApiError;
use crate::query_types::{LoginRequest, RegisterRequest};
use crate::response_types::{LoginResponse, RegisterResponse};
use crate::AppState;

/// `POST /api/auth/register` — 201 on success, 422 on field validation,
/// 400 on a duplicate email.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let name = req.name.unwrap_or_default();
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    match state.auth.register(&name, &email, &password).await {
        Ok(()) => {
            Ok((StatusCode::CREATED, Json(RegisterResponse { message: "Registered successfully." })))
        },
        // Field validation gets 422 here; the blanket conversion would
        // turn it into a 400 like the chat routes use.
        Err(ServiceError::InvalidInput(msg)) => Err(ApiError::UnprocessableEntity(msg)),
        Err(e) => Err(e.into()),
    }
}

/// `POST /api/auth/login` — 200 with token and public user, 400 with
/// the same generic message on any credential failure.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    let (token, user) = state.auth.login(&email, &password).await?;
    Ok(Json(LoginResponse { token, user }))
}

/// `POST /api/auth/forgot-password` — not available in normal auth mode.
pub async fn forgot_password() -> ApiError {
    ApiError::NotImplemented("Forgot password not implemented in normal auth mode.".to_owned())
}

/// `POST /api/auth/reset-password` — not available in normal auth mode.
pub async fn reset_password() -> ApiError {
    ApiError::NotImplemented("Reset password not implemented in normal auth mode.".to_owned())
}
