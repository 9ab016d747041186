//! Import a flat trait file into the store.
//!
//! The sectioned format additionally produces the normalized per-persona
//! document; both formats replace the legacy flat collection wholesale.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use persona_chat_core::{normalize_traits, parse_legacy_trait_file, parse_sectioned_trait_file};
use persona_chat_service::TraitService;
use persona_chat_storage::PgStorage;
use std::sync::Arc;

use crate::Config;

pub(crate) async fn run(file: &Path, persona: &str, legacy: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("reading trait file {}", file.display()))?;
    tracing::info!(path = %file.display(), bytes = content.len(), "trait file loaded");

    let traits =
        if legacy { parse_legacy_trait_file(&content) } else { parse_sectioned_trait_file(&content) };
    if traits.is_empty() {
        anyhow::bail!("no traits found in {}", file.display());
    }
    for (i, t) in traits.iter().enumerate() {
        let preview: String = t.description.chars().take(50).collect();
        println!("Trait {}: {} ({}) — {preview}...", i + 1, t.title, t.category);
    }

    let config = Config::from_env()?;
    let storage = Arc::new(PgStorage::new(&config.database_url).await?);
    let service = TraitService::new(storage);

    let count = service.import_flat(&traits).await?;
    println!("{count} traits imported");

    if !legacy {
        if let Some(doc) = normalize_traits(persona, &traits, Utc::now()) {
            service.upsert_traits(&doc).await?;
            println!("normalized trait document stored for persona {persona}");
        }
    }

    Ok(())
}
