use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::api_error::ApiError;
use crate::query_types::StorePersonaRequest;
use crate::response_types::{
    PersonaResponse, StorePersonaResponse, StoredPersona, TraitListResponse, TraitsResponse,
};
use crate::AppState;

/// `GET /api/personas/{id}` — base profile with resolved traits.
/// Unknown ids resolve to the default profile, never a 404.
pub async fn get_persona(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PersonaResponse>, ApiError> {
    let data = state.personas.get_persona(&id).await?;
    Ok(Json(PersonaResponse { success: true, data }))
}

/// `GET /api/personas/traits/{persona_id}` — the normalized trait
/// document, or 404 when nothing is stored for that persona.
pub async fn get_traits(
    State(state): State<Arc<AppState>>,
    Path(persona_id): Path<String>,
) -> Result<Json<TraitsResponse>, ApiError> {
    let traits = state.traits.get_traits(&persona_id).await?;
    Ok(Json(TraitsResponse { success: true, traits }))
}

/// `GET /api/personas/traits` — every normalized trait document.
pub async fn list_traits(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TraitListResponse>, ApiError> {
    let traits = state.traits.list_traits().await?;
    Ok(Json(TraitListResponse { success: true, traits }))
}

/// `POST /api/personas/store-persona` — reshape the submitted sections
/// and upsert them wholesale as the persona's profile.
pub async fn store_persona(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StorePersonaRequest>,
) -> Result<Json<StorePersonaResponse>, ApiError> {
    let (Some(persona_id), Some(sections)) = (req.persona_id, req.traits) else {
        return Err(ApiError::BadRequest(
            "Missing required fields: personaId or traits".to_owned(),
        ));
    };

    let (created, traits) = state.traits.store_persona(&persona_id, &sections).await?;
    let message =
        if created { "Persona created successfully" } else { "Persona updated successfully" };
    Ok(Json(StorePersonaResponse {
        success: true,
        message: message.to_owned(),
        data: StoredPersona { persona_id, traits },
    }))
}
