use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` (or a test) and cloned per request; there is no
/// process-wide database handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: holonet_db::DbPool,
    /// Server configuration (token verification settings live here).
    pub config: Arc<ServerConfig>,
}
