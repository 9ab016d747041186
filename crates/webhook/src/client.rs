use chrono::Utc;
use persona_chat_core::{OFFLINE_REPLY_DELAY_MS, WEBHOOK_TIMEOUT_SECS};

use crate::error::WebhookError;
use crate::payload::{ConnectionCheck, WebhookPayload};
use crate::reply::extract_reply;
use crate::ticket::SessionTicket;

/// Persona ids that route through the external endpoint. Everyone else
/// gets a canned local reply.
const WEBHOOK_PERSONAS: [&str; 2] = ["1", "2"];

/// Marker the endpoint puts in a 404 body when the workflow exists but
/// is not switched on.
const INACTIVE_WORKFLOW_MARKER: &str = "not registered";

/// Advisory shown instead of an error for the inactive-workflow case.
const INACTIVE_WORKFLOW_REPLY: &str =
    "The AI workflow is not currently active. Please activate the workflow and try again.";

/// Whether this persona is wired to the external endpoint.
#[must_use]
pub fn is_webhook_persona(persona_id: &str) -> bool {
    WEBHOOK_PERSONAS.contains(&persona_id)
}

/// Canned reply for personas outside the allow-list, after a fixed
/// artificial delay standing in for "thinking" time. No network call.
pub async fn reply_for_offline_persona(persona_id: &str, persona_name: &str) -> String {
    tokio::time::sleep(std::time::Duration::from_millis(OFFLINE_REPLY_DELAY_MS)).await;
    match persona_id {
        "3" => "From an engineering standpoint, I'd want to see the technical constraints \
                before committing to a direction. Can you share more detail about the system \
                involved?"
            .to_owned(),
        "4" => "Strategically, this comes down to where we want the technology platform to be \
                in three years. Let me walk you through how I'd frame that decision."
            .to_owned(),
        _ => format!(
            "Thanks for your message. As {persona_name}, I'd be happy to dig into this with \
             you — tell me a bit more about what you're trying to achieve."
        ),
    }
}

/// Client for the single external AI webhook endpoint.
///
/// The endpoint URL is injected at construction; nothing in this crate
/// holds a hardcoded address. Each call is a bounded single attempt,
/// no retry and no backoff: a failed turn resolves to the fallback line
/// in the transcript instead of keeping the user waiting.
pub struct WebhookClient {
    client: reqwest::Client,
    url: String,
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient").field("url", &self.url).finish_non_exhaustive()
    }
}

impl WebhookClient {
    /// Build the client for the given endpoint URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// failure).
    pub fn new(url: String) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(WEBHOOK_TIMEOUT_SECS))
            .build()
            .map_err(|e| WebhookError::ClientInit(e.to_string()))?;
        Ok(Self { client, url })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forward one chat turn and normalize the reply.
    ///
    /// # Errors
    /// Returns an error if the request fails on the wire or the endpoint
    /// answers with a non-success status other than the known
    /// inactive-workflow 404.
    pub async fn send(
        &self,
        message: &str,
        persona_id: &str,
        persona_name: &str,
        user_id: &str,
        ticket: &SessionTicket,
    ) -> Result<String, WebhookError> {
        let payload = WebhookPayload {
            message: message.to_owned(),
            persona_id: persona_id.to_owned(),
            persona_name: persona_name.to_owned(),
            user_id: user_id.to_owned(),
            session_id: ticket.id().to_owned(),
            timestamp: Utc::now().to_rfc3339(),
        };
        tracing::debug!(persona = %persona_name, session = %ticket.id(), "sending to webhook");

        let response = self.client.post(&self.url).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if status.as_u16() == 404 && body.contains(INACTIVE_WORKFLOW_MARKER) {
                tracing::warn!("webhook workflow inactive");
                return Ok(INACTIVE_WORKFLOW_REPLY.to_owned());
            }
            tracing::error!(code = status.as_u16(), "webhook returned non-success status");
            return Err(WebhookError::Status { code: status.as_u16(), body });
        }

        Ok(extract_reply(&body))
    }

    /// Probe the endpoint. `true` when it answers with a success status.
    pub async fn test_connection(&self, ticket: &SessionTicket) -> bool {
        let check =
            ConnectionCheck { test: "connection_check", session_id: ticket.id().to_owned() };
        match self.client.post(&self.url).json(&check).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "webhook connection test failed");
                false
            },
        }
    }
}
