/// Client-side session identity for webhook calls.
///
/// Generated once and reused for every payload until explicitly rotated,
/// so the external endpoint can correlate a conversation. Callers that
/// want the id to survive restarts persist `id()` themselves and rebuild
/// with [`SessionTicket::from_id`].
#[derive(Debug, Clone)]
pub struct SessionTicket {
    id: String,
}

impl SessionTicket {
    /// A fresh pseudo-random identity.
    #[must_use]
    pub fn generate() -> Self {
        Self { id: uuid::Uuid::new_v4().to_string() }
    }

    /// Rebuild a previously persisted identity.
    #[must_use]
    pub fn from_id(id: String) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Discard the current identity and start a new conversation.
    pub fn rotate(&mut self) -> &str {
        self.id = uuid::Uuid::new_v4().to_string();
        &self.id
    }
}

impl Default for SessionTicket {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_is_stable_until_rotated() {
        let mut ticket = SessionTicket::generate();
        let before = ticket.id().to_owned();
        assert_eq!(ticket.id(), before);
        ticket.rotate();
        assert_ne!(ticket.id(), before);
    }

    #[test]
    fn test_from_id_round_trip() {
        let ticket = SessionTicket::from_id("persisted-id".to_owned());
        assert_eq!(ticket.id(), "persisted-id");
    }
}
