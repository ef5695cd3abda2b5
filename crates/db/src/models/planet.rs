//! Planet entity model and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row from the `planets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
}

/// DTO for loading a planet into the catalogue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanet {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
}
