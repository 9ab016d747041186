//! Dump the stored trait data as pretty JSON.

use std::sync::Arc;

use anyhow::Result;
use persona_chat_service::TraitService;
use persona_chat_storage::PgStorage;

use crate::Config;

pub(crate) async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let storage = Arc::new(PgStorage::new(&config.database_url).await?);
    let service = TraitService::new(storage);

    let normalized = service.list_traits().await?;
    let flat = service.list_flat().await?;

    let out = serde_json::json!({
        "personaTraits": normalized,
        "traits": flat,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
