//! Webhook gateway for persona-chat
//!
//! Forwards a user message plus persona/session metadata to the single
//! external AI endpoint and normalizes whatever comes back into display
//! text. Personas outside the allow-list never touch the network.

mod client;
mod error;
mod payload;
mod reply;
mod ticket;

#[cfg(test)]
mod gateway_tests;

pub use client::{is_webhook_persona, reply_for_offline_persona, WebhookClient};
pub use error::WebhookError;
pub use payload::WebhookPayload;
pub use reply::extract_reply;
pub use ticket::SessionTicket;
