use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ChatMessage;

/// Grouping key for one logical conversation.
///
/// Rows written since sessions existed carry an explicit id; older rows
/// are grouped by persona and the UTC calendar day of their timestamp.
/// Keeping the two spaces as enum variants makes them disjoint by
/// construction — an explicit session id that happens to look like a
/// rendered legacy key is still `Explicit`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionKey {
    Explicit(String),
    Legacy { persona: String, day: NaiveDate },
}

impl SessionKey {
    /// Derive the key for a message. Whitespace-only session ids count
    /// as absent.
    pub fn for_message(message: &ChatMessage) -> Self {
        if message.session_id.trim().is_empty() {
            Self::Legacy {
                persona: message.persona.clone(),
                day: message.timestamp.date_naive(),
            }
        } else {
            Self::Explicit(message.session_id.clone())
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(id) => f.write_str(id),
            Self::Legacy { persona, day } => write!(
                f,
                "legacy_session_{persona}_{}-{}-{}",
                day.year(),
                day.month(),
                day.day()
            ),
        }
    }
}

/// Derived view of one conversation for the history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub persona: String,
    /// The AI response of the chronologically last message, or its user
    /// message when the response is empty.
    pub last_message: String,
    /// Last message's timestamp as `M/D/YYYY`.
    pub date: String,
    pub messages: Vec<ChatMessage>,
}

/// Group messages into sessions.
///
/// The input is sorted by `(timestamp, id)` first, so the grouping and
/// per-group order are identical across calls regardless of the order
/// the store returned rows in.
pub fn group_into_sessions(messages: &[ChatMessage]) -> BTreeMap<SessionKey, Vec<ChatMessage>> {
    let mut sorted: Vec<ChatMessage> = messages.to_vec();
    sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));

    let mut groups: BTreeMap<SessionKey, Vec<ChatMessage>> = BTreeMap::new();
    for message in sorted {
        groups.entry(SessionKey::for_message(&message)).or_default().push(message);
    }
    groups
}

/// Derive one [`SessionSummary`] per group, newest conversation first.
pub fn summarize_sessions(groups: BTreeMap<SessionKey, Vec<ChatMessage>>) -> Vec<SessionSummary> {
    let mut summaries: Vec<SessionSummary> = groups
        .into_iter()
        .filter_map(|(key, messages)| {
            let last = messages.last()?;
            let last_message = if last.ai_response.trim().is_empty() {
                last.user_message.clone()
            } else {
                last.ai_response.clone()
            };
            Some(SessionSummary {
                session_id: key.to_string(),
                persona: last.persona.clone(),
                last_message,
                date: last.timestamp.format("%-m/%-d/%Y").to_string(),
                messages,
            })
        })
        .collect();

    summaries.sort_by(|a, b| {
        let at = a.messages.last().map(|m| m.timestamp);
        let bt = b.messages.last().map(|m| m.timestamp);
        bt.cmp(&at)
    });
    summaries
}
