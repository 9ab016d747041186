use serde::Serialize;

/// The JSON body posted to the external endpoint for each chat turn.
#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub message: String,
    pub persona_id: String,
    pub persona_name: String,
    pub user_id: String,
    pub session_id: String,
    /// RFC 3339 instant the client built the payload.
    pub timestamp: String,
}

/// Body for the reachability probe.
#[derive(Debug, Serialize)]
pub(crate) struct ConnectionCheck {
    pub test: &'static str,
    pub session_id: String,
}
