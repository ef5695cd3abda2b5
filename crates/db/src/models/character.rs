//! Character entity model and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

/// DTO for loading a character into the catalogue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}
