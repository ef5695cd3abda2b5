//! Favorite join entity.

use holonet_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A favorite row from the `favorites` table.
///
/// Exactly one of `planet_id` / `character_id` is set; the table's CHECK
/// constraint guarantees it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub planet_id: Option<DbId>,
    pub character_id: Option<DbId>,
    pub created_at: Timestamp,
}
