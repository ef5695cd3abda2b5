//! Route definitions for the `/character` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/character`.
///
/// ```text
/// GET /      -> list
/// GET /{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list))
        .route("/{id}", get(character::get_by_id))
}
