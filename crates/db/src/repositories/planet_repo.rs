//! Repository for the `planets` table.

use holonet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::planet::{CreatePlanet, Planet};

const COLUMNS: &str = "id, name, climate, terrain, population, diameter, gravity";

/// Read access to planets. Mirrors [`super::CharacterRepo`].
pub struct PlanetRepo;

impl PlanetRepo {
    pub async fn create(pool: &SqlitePool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, climate, terrain, population, diameter, gravity)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.climate)
            .bind(&input.terrain)
            .bind(&input.population)
            .bind(&input.diameter)
            .bind(&input.gravity)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all planets in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id ASC");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM planets WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
