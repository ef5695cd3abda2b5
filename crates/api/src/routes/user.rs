//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{favorite, user};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /           -> list
/// GET /favorites  -> favorites of the current user (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list))
        .route("/favorites", get(favorite::list_mine))
}
