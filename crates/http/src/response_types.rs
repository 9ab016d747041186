//! Response types (Serialize)

use serde::Serialize;

use persona_chat_core::{ChatMessage, FlatTrait, PersonaTrait, PublicUser, SessionSummary};
use persona_chat_service::PersonaWithTraits;

#[derive(Debug, Serialize)]
pub struct SaveChatResponse {
    pub success: bool,
    pub chat: ChatMessage,
}

#[derive(Debug, Serialize)]
pub struct ChatsResponse {
    pub success: bool,
    pub chats: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct SessionsResponse {
    pub success: bool,
    pub sessions: Vec<SessionSummary>,
}

#[derive(Debug, Serialize)]
pub struct TraitsResponse {
    pub success: bool,
    pub traits: PersonaTrait,
}

#[derive(Debug, Serialize)]
pub struct TraitListResponse {
    pub success: bool,
    pub traits: Vec<PersonaTrait>,
}

#[derive(Debug, Serialize)]
pub struct PersonaResponse {
    pub success: bool,
    pub data: PersonaWithTraits,
}

#[derive(Debug, Serialize)]
pub struct StorePersonaResponse {
    pub success: bool,
    pub message: String,
    pub data: StoredPersona,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPersona {
    pub persona_id: String,
    pub traits: Vec<FlatTrait>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}
