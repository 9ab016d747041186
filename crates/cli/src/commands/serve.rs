use std::sync::Arc;

use anyhow::Result;
use persona_chat_http::{create_router, AppState};
use persona_chat_service::{AuthService, ChatService, PersonaService, TraitService};
use persona_chat_storage::PgStorage;

use crate::Config;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let config = Config::from_env()?;
    let storage = Arc::new(PgStorage::new(&config.database_url).await?);

    let state = Arc::new(AppState {
        chats: ChatService::new(storage.clone()),
        traits: TraitService::new(storage.clone()),
        personas: PersonaService::new(storage.clone()),
        auth: AuthService::new(storage, config.auth_secret),
    });

    let router = create_router(state, &config.cors_origin);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
