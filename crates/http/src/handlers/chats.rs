use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api_error::ApiError;
use crate::query_types::{ChatHistoryQuery, SaveChatRequest, SessionsQuery};
use crate::response_types::{ChatsResponse, SaveChatResponse, SessionsResponse};
use crate::AppState;

/// `POST /api/personas/chats` — persist one exchange, 201 on success.
pub async fn save_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveChatRequest>,
) -> Result<(StatusCode, Json<SaveChatResponse>), ApiError> {
    let chat = state.chats.append(req.into()).await?;
    Ok((StatusCode::CREATED, Json(SaveChatResponse { success: true, chat })))
}

/// `GET /api/personas/chats` — a user's history, timestamp ascending.
pub async fn get_chats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChatHistoryQuery>,
) -> Result<Json<ChatsResponse>, ApiError> {
    let user = query.user.unwrap_or_default();
    let chats = state
        .chats
        .history(&user, query.persona.as_deref(), query.session_id.as_deref())
        .await?;
    Ok(Json(ChatsResponse { success: true, chats }))
}

/// `GET /api/personas/sessions` — history regrouped into conversations.
pub async fn get_sessions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionsQuery>,
) -> Result<Json<SessionsResponse>, ApiError> {
    let user = query.user.unwrap_or_default();
    let sessions = state.chats.sessions(&user, query.persona.as_deref()).await?;
    Ok(Json(SessionsResponse { success: true, sessions }))
}
