//! Handlers for the read-only `/character` resource.

use axum::extract::State;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::character::Character;
use holonet_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::state::AppState;

/// GET /character
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    tracing::debug!(count = characters.len(), "Listed characters");
    Ok(Json(characters))
}

/// GET /character/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}
