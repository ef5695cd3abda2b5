pub mod character;
pub mod favorite;
pub mod health;
pub mod planet;
pub mod user;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Every public route as `(method, path, description)`, served by `GET /`.
///
/// Keep in step with [`api_routes`]; `tests/health.rs` requests each entry.
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/", "List all endpoints"),
    ("GET", "/health", "Service and database health"),
    ("GET", "/character", "List all characters"),
    ("GET", "/character/{id}", "Get one character"),
    ("GET", "/planet", "List all planets"),
    ("GET", "/planet/{id}", "Get one planet"),
    ("GET", "/users", "List users ordered by email"),
    ("GET", "/users/favorites", "List the current user's favorites"),
    ("POST", "/favorite/planet/{planet_id}", "Add a favorite planet"),
    ("DELETE", "/favorite/planet/{planet_id}", "Remove a favorite planet"),
    ("POST", "/favorite/people/{people_id}", "Add a favorite character"),
    ("DELETE", "/favorite/people/{people_id}", "Remove a favorite character"),
];

/// Build the resource route tree.
///
/// ```text
/// /                                   sitemap
/// /character, /character/{id}         read-only characters
/// /planet, /planet/{id}               read-only planets
/// /users                              users ordered by email
/// /users/favorites                    current user's favorites (auth)
/// /favorite/planet/{planet_id}        add / remove planet favorite (auth)
/// /favorite/people/{people_id}        add / remove character favorite (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::sitemap::sitemap))
        .nest("/character", character::router())
        .nest("/planet", planet::router())
        .nest("/users", user::router())
        .nest("/favorite", favorite::router())
}
