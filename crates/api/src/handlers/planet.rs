//! Handlers for the read-only `/planet` resource.

use axum::extract::State;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::planet::Planet;
use holonet_db::repositories::PlanetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::state::AppState;

/// GET /planet
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    tracing::debug!(count = planets.len(), "Listed planets");
    Ok(Json(planets))
}

/// GET /planet/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Planet>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }))?;
    Ok(Json(planet))
}
