//! Request/query types (Deserialize)

use persona_chat_core::{NewChatMessage, TraitSections};
use serde::Deserialize;

/// Body for `POST /api/personas/chats`. Every field is required, but
/// they are optional here so the service layer can answer a missing
/// field with its own 400 message instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct SaveChatRequest {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub persona: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user_message: Option<String>,
    #[serde(default)]
    pub ai_response: Option<String>,
}

impl From<SaveChatRequest> for NewChatMessage {
    fn from(req: SaveChatRequest) -> Self {
        Self {
            user: req.user.unwrap_or_default(),
            persona: req.persona.unwrap_or_default(),
            session_id: req.session_id.unwrap_or_default(),
            user_message: req.user_message.unwrap_or_default(),
            ai_response: req.ai_response.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatHistoryQuery {
    #[serde(default)]
    pub user: Option<String>,
    pub persona: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionsQuery {
    #[serde(default)]
    pub user: Option<String>,
    pub persona: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StorePersonaRequest {
    #[serde(rename = "personaId")]
    pub persona_id: Option<String>,
    pub traits: Option<TraitSections>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
