//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use holonet_db::models::user::UserResponse;
use holonet_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::response::ResultResponse;
use crate::state::AppState;

/// GET /users
///
/// All users ordered by email, without password hashes.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ResultResponse<Vec<UserResponse>>>> {
    let users: Vec<UserResponse> = UserRepo::list_by_email(&state.pool)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(ResultResponse::new("These are your users", users)))
}
