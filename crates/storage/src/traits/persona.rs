use async_trait::async_trait;
use persona_chat_core::{FlatTrait, PersonaTrait};

use crate::error::StorageError;

/// Persona trait persistence: the normalized per-persona document, the
/// legacy flat collection, and the formatted per-persona profiles.
#[async_trait]
pub trait TraitStore: Send + Sync {
    /// Wholesale upsert of the normalized document, keyed by persona id.
    async fn upsert_persona_traits(&self, doc: &PersonaTrait) -> Result<(), StorageError>;

    /// The normalized document for one persona, if present.
    async fn get_persona_traits(&self, persona_id: &str)
    -> Result<Option<PersonaTrait>, StorageError>;

    /// Every normalized document.
    async fn list_persona_traits(&self) -> Result<Vec<PersonaTrait>, StorageError>;

    /// Replace the whole legacy collection (delete-then-insert).
    /// Returns the inserted count.
    async fn replace_flat_traits(&self, traits: &[FlatTrait]) -> Result<usize, StorageError>;

    /// The legacy collection, in insertion order.
    async fn list_flat_traits(&self) -> Result<Vec<FlatTrait>, StorageError>;

    /// Upsert a persona's formatted profile. Returns `true` when the
    /// profile was created rather than updated.
    async fn upsert_persona_profile(
        &self,
        persona_id: &str,
        traits: &[FlatTrait],
    ) -> Result<bool, StorageError>;

    /// A persona's formatted profile, if one was stored.
    async fn get_persona_profile(
        &self,
        persona_id: &str,
    ) -> Result<Option<Vec<FlatTrait>>, StorageError>;
}
