//! Route definitions for the `/planet` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// Routes mounted at `/planet`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planet::list))
        .route("/{id}", get(planet::get_by_id))
}
