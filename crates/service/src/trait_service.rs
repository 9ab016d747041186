use std::sync::Arc;

use persona_chat_core::{FlatTrait, PersonaTrait, TraitSections};
use persona_chat_storage::traits::TraitStore;
use persona_chat_storage::StorageError;

use crate::error::ServiceError;

/// Trait document read/write logic: the normalized per-persona rows,
/// the legacy flat collection, and the formatted profiles.
pub struct TraitService {
    storage: Arc<dyn TraitStore>,
}

impl TraitService {
    #[must_use]
    pub fn new(storage: Arc<dyn TraitStore>) -> Self {
        Self { storage }
    }

    /// The normalized document for one persona, or `NotFound`.
    pub async fn get_traits(&self, persona_id: &str) -> Result<PersonaTrait, ServiceError> {
        self.storage.get_persona_traits(persona_id).await?.ok_or_else(|| {
            ServiceError::Storage(StorageError::NotFound {
                entity: "persona traits",
                id: persona_id.to_owned(),
            })
        })
    }

    /// Every normalized document.
    pub async fn list_traits(&self) -> Result<Vec<PersonaTrait>, ServiceError> {
        Ok(self.storage.list_persona_traits().await?)
    }

    /// Wholesale upsert of the normalized document.
    pub async fn upsert_traits(&self, doc: &PersonaTrait) -> Result<(), ServiceError> {
        if doc.persona_id.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Missing required field: personaId".to_owned(),
            ));
        }
        Ok(self.storage.upsert_persona_traits(doc).await?)
    }

    /// Reshape the submitted sections into titled flat traits and store
    /// them as the persona's formatted profile. Returns the stored
    /// traits and whether the profile was newly created.
    pub async fn store_persona(
        &self,
        persona_id: &str,
        sections: &TraitSections,
    ) -> Result<(bool, Vec<FlatTrait>), ServiceError> {
        if persona_id.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Missing required field: personaId".to_owned(),
            ));
        }
        let traits = sections.to_flat_traits();
        let created = self.storage.upsert_persona_profile(persona_id, &traits).await?;
        Ok((created, traits))
    }

    /// Replace the whole legacy collection.
    pub async fn import_flat(&self, traits: &[FlatTrait]) -> Result<usize, ServiceError> {
        Ok(self.storage.replace_flat_traits(traits).await?)
    }

    /// The legacy collection in insertion order.
    pub async fn list_flat(&self) -> Result<Vec<FlatTrait>, ServiceError> {
        Ok(self.storage.list_flat_traits().await?)
    }
}
