//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and the
//! right status code. Handlers return `Result<Json<T>, ApiError>` so no
//! error crosses the HTTP boundary unconverted.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use persona_chat_service::ServiceError;
use persona_chat_storage::StorageError;

/// API error with HTTP status code and caller-facing message.
///
/// Converts to a JSON response `{"success": false, "error": "..."}`.
/// `Store` carries the driver error text into the 500 body; clients
/// read it for diagnostics.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — missing/invalid input, duplicate email, bad credentials.
    BadRequest(String),
    /// 404 Not Found — requested resource doesn't exist.
    NotFound(String),
    /// 422 Unprocessable Entity — registration field validation.
    UnprocessableEntity(String),
    /// 501 Not Implemented — password-reset flow in normal auth mode.
    NotImplemented(String),
    /// 500 Internal Server Error — storage failure, driver text included.
    Store(StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::NotImplemented(msg) => (StatusCode::NOT_IMPLEMENTED, msg),
            Self::Store(err) => {
                tracing::error!(error = ?err, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            },
        };
        let body = serde_json::json!({"success": false, "error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            ServiceError::Storage(e) => Self::Store(e),
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Conflict(msg) => Self::BadRequest(msg),
            ServiceError::InvalidCredentials => Self::BadRequest(err.to_string()),
            ServiceError::InvalidToken(msg) => Self::BadRequest(msg.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_maps_to_400_generic() {
        let api: ApiError = ServiceError::InvalidCredentials.into();
        match api {
            ApiError::BadRequest(msg) => assert_eq!(msg, "Invalid email or password"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_storage_error_maps_to_404() {
        let err = ServiceError::Storage(StorageError::NotFound {
            entity: "persona traits",
            id: "7".to_owned(),
        });
        assert!(matches!(ApiError::from(err), ApiError::NotFound(_)));
    }

    #[test]
    fn test_conflict_maps_to_400() {
        let err = ServiceError::Conflict("Email already registered".to_owned());
        match ApiError::from(err) {
            ApiError::BadRequest(msg) => assert_eq!(msg, "Email already registered"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }
}
