//! Handlers for the current user's favorites.
//!
//! ```text
//! GET    /users/favorites
//! POST   /favorite/planet/{planet_id}
//! POST   /favorite/people/{people_id}
//! DELETE /favorite/planet/{planet_id}
//! DELETE /favorite/people/{people_id}
//! ```
//!
//! Planet and character routes share [`add`] and [`remove`]; the route only
//! decides which [`FavoriteTarget`] variant to build.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::favorite::FavoriteTarget;
use holonet_core::types::DbId;
use holonet_db::models::favorite::Favorite;
use holonet_db::repositories::{CharacterRepo, FavoriteRepo, PlanetRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::middleware::auth::AuthUser;
use crate::response::{MessageResponse, ResultResponse};
use crate::state::AppState;

/// GET /users/favorites
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = FavoriteRepo::list_by_user(&state.pool, user.user_id).await?;
    tracing::debug!(user_id = user.user_id, count = favorites.len(), "Listed favorites");
    Ok(Json(favorites))
}

/// POST /favorite/planet/{planet_id}
pub async fn add_planet(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(planet_id): ApiPath<DbId>,
) -> AppResult<(StatusCode, Json<ResultResponse<Favorite>>)> {
    add(&state, &user, FavoriteTarget::Planet(planet_id)).await
}

/// POST /favorite/people/{people_id}
pub async fn add_character(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(people_id): ApiPath<DbId>,
) -> AppResult<(StatusCode, Json<ResultResponse<Favorite>>)> {
    add(&state, &user, FavoriteTarget::Character(people_id)).await
}

/// DELETE /favorite/planet/{planet_id}
pub async fn remove_planet(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(planet_id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    remove(&state, &user, FavoriteTarget::Planet(planet_id)).await
}

/// DELETE /favorite/people/{people_id}
pub async fn remove_character(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(people_id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    remove(&state, &user, FavoriteTarget::Character(people_id)).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Link the user to `target` after checking the target exists and is not
/// already a favorite.
async fn add(
    state: &AppState,
    user: &AuthUser,
    target: FavoriteTarget,
) -> AppResult<(StatusCode, Json<ResultResponse<Favorite>>)> {
    ensure_target_exists(state, target).await?;

    let kind = target.kind();
    if FavoriteRepo::find(&state.pool, user.user_id, target)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "{} with id {} already exists",
            kind.favorite_name(),
            target.id()
        ))));
    }

    let favorite = FavoriteRepo::create(&state.pool, user.user_id, target).await?;
    tracing::info!(
        id = favorite.id,
        user_id = user.user_id,
        kind = ?kind,
        target_id = target.id(),
        "Favorite added"
    );

    let message = format!("New {} added", kind.favorite_name().to_lowercase());
    Ok((
        StatusCode::CREATED,
        Json(ResultResponse::new(message, favorite)),
    ))
}

/// Unlink the user from `target`. A missing favorite is a 404 and changes
/// nothing.
async fn remove(
    state: &AppState,
    user: &AuthUser,
    target: FavoriteTarget,
) -> AppResult<Json<MessageResponse>> {
    let kind = target.kind();
    let deleted = FavoriteRepo::delete(&state.pool, user.user_id, target).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: kind.favorite_name(),
            id: target.id(),
        }));
    }

    tracing::info!(
        user_id = user.user_id,
        kind = ?kind,
        target_id = target.id(),
        "Favorite removed"
    );
    Ok(Json(MessageResponse::new(format!(
        "{} removed",
        kind.favorite_name()
    ))))
}

async fn ensure_target_exists(state: &AppState, target: FavoriteTarget) -> AppResult<()> {
    let exists = match target {
        FavoriteTarget::Planet(id) => PlanetRepo::exists(&state.pool, id).await?,
        FavoriteTarget::Character(id) => CharacterRepo::exists(&state.pool, id).await?,
    };
    if exists {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: target.kind().entity_name(),
            id: target.id(),
        }))
    }
}
