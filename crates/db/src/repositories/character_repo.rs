//! Repository for the `characters` table.

use holonet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::character::{Character, CreateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, gender, birth_year, height, hair_color, eye_color";

/// Provides read access to characters. The API never writes this table;
/// `create` exists for catalogue loading and fixtures.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, gender, birth_year, height, hair_color, eye_color)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.gender)
            .bind(&input.birth_year)
            .bind(&input.height)
            .bind(&input.hair_color)
            .bind(&input.eye_color)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Whether a character with the given ID exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM characters WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
