//! One-shot chat turn through the webhook gateway.
//!
//! Keeps a session ticket on disk so consecutive invocations stay in the
//! same conversation until `--new-session` rotates it. Gateway failures
//! never abort the command: they resolve to the fixed fallback line so
//! the transcript stays consistent.

use std::sync::Arc;

use anyhow::{Context, Result};
use persona_chat_core::{base_persona, NewChatMessage};
use persona_chat_service::ChatService;
use persona_chat_storage::PgStorage;
use persona_chat_webhook::{
    is_webhook_persona, reply_for_offline_persona, SessionTicket, WebhookClient, WebhookError,
};

use crate::{session_ticket_path, Config};

pub(crate) async fn run(
    message: &str,
    persona_id: &str,
    user: Option<&str>,
    new_session: bool,
) -> Result<()> {
    let config = Config::from_env()?;
    let mut ticket = load_ticket()?;
    if new_session {
        ticket.rotate();
        save_ticket(&ticket)?;
        tracing::info!(session = %ticket.id(), "started new session");
    }

    let persona = base_persona(persona_id);
    let user_id = user.unwrap_or("current_user");

    let reply = if is_webhook_persona(persona_id) {
        let client = WebhookClient::new(config.webhook_url.clone())?;
        match client.send(message, persona_id, &persona.name, user_id, &ticket).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "webhook call failed");
                WebhookError::fallback_reply().to_owned()
            },
        }
    } else {
        reply_for_offline_persona(persona_id, &persona.name).await
    };

    println!("{reply}");

    if let Some(user) = user {
        let storage = Arc::new(PgStorage::new(&config.database_url).await?);
        let chats = ChatService::new(storage);
        chats
            .append(NewChatMessage {
                user: user.to_owned(),
                persona: persona_id.to_owned(),
                session_id: ticket.id().to_owned(),
                user_message: message.to_owned(),
                ai_response: reply,
            })
            .await?;
        tracing::info!(user, "exchange persisted");
    }

    Ok(())
}

fn load_ticket() -> Result<SessionTicket> {
    let path = session_ticket_path();
    match std::fs::read_to_string(&path) {
        Ok(contents) if !contents.trim().is_empty() => {
            Ok(SessionTicket::from_id(contents.trim().to_owned()))
        },
        _ => {
            let ticket = SessionTicket::generate();
            save_ticket(&ticket)?;
            Ok(ticket)
        },
    }
}

fn save_ticket(ticket: &SessionTicket) -> Result<()> {
    let path = session_ticket_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, ticket.id()).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
