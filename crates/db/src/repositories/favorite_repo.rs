//! Repository for the `favorites` table.
//!
//! Every write goes through a [`FavoriteTarget`], which fixes which of the
//! two target columns is bound and which is left NULL.

use holonet_core::favorite::FavoriteTarget;
use holonet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::favorite::Favorite;

const COLUMNS: &str = "id, user_id, planet_id, character_id, created_at";

/// Target predicate matching one planet or one character.
///
/// `IS` is SQLite's null-safe equality, so the unset column matches NULL.
const TARGET_FILTER: &str = "user_id = $1 AND planet_id IS $2 AND character_id IS $3";

/// Provides create / lookup / delete for a user's favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite linking `user_id` to `target`, returning the created row.
    ///
    /// A second insert for the same user and target violates one of the
    /// `uq_favorites_*` unique indexes.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        target: FavoriteTarget,
    ) -> Result<Favorite, sqlx::Error> {
        let (planet_id, character_id) = target.columns();
        let query = format!(
            "INSERT INTO favorites (user_id, planet_id, character_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(planet_id)
            .bind(character_id)
            .fetch_one(pool)
            .await
    }

    /// Find the favorite a user holds for `target`, if any.
    pub async fn find(
        pool: &SqlitePool,
        user_id: DbId,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let (planet_id, character_id) = target.columns();
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE {TARGET_FILTER}");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(planet_id)
            .bind(character_id)
            .fetch_optional(pool)
            .await
    }

    /// List all favorites of a user, oldest first.
    pub async fn list_by_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<Favorite>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM favorites WHERE user_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete the favorite a user holds for `target`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(
        pool: &SqlitePool,
        user_id: DbId,
        target: FavoriteTarget,
    ) -> Result<bool, sqlx::Error> {
        let (planet_id, character_id) = target.columns();
        let query = format!("DELETE FROM favorites WHERE {TARGET_FILTER}");
        let result = sqlx::query(&query)
            .bind(user_id)
            .bind(planet_id)
            .bind(character_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
