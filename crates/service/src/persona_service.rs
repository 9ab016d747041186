use std::sync::Arc;

use serde::Serialize;

use persona_chat_core::{base_persona, mock_traits, FlatTrait, Persona};
use persona_chat_storage::traits::TraitStore;

use crate::error::ServiceError;

/// A catalog profile with its traits resolved.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaWithTraits {
    #[serde(flatten)]
    pub persona: Persona,
    pub traits: Vec<FlatTrait>,
}

/// Resolves catalog profiles against stored trait data.
pub struct PersonaService {
    storage: Arc<dyn TraitStore>,
}

impl PersonaService {
    #[must_use]
    pub fn new(storage: Arc<dyn TraitStore>) -> Self {
        Self { storage }
    }

    /// Base profile plus traits. Resolution order: the stored formatted
    /// profile, then (for the first persona only) the legacy flat
    /// collection, then generated placeholders. Unknown ids get the
    /// default profile — this read never 404s.
    pub async fn get_persona(&self, id: &str) -> Result<PersonaWithTraits, ServiceError> {
        let persona = base_persona(id);

        let traits = if let Some(stored) = self.storage.get_persona_profile(id).await? {
            stored
        } else if id == "1" {
            // The first persona predates per-persona profiles; its data
            // lives in the legacy flat collection.
            self.storage.list_flat_traits().await?
        } else {
            mock_traits(id)
        };

        Ok(PersonaWithTraits { persona, traits })
    }
}
