//! Favorite targets.
//!
//! A favorite points at exactly one planet or exactly one character. The
//! `favorites` table stores this as two nullable columns guarded by a CHECK
//! constraint; in Rust the pair is only ever built from a [`FavoriteTarget`],
//! so "both" and "neither" cannot be expressed on the write path.

use crate::types::DbId;

/// The kind of entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Planet,
    Character,
}

impl FavoriteKind {
    /// Entity name used in not-found errors and log fields.
    pub fn entity_name(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Planet",
            FavoriteKind::Character => "Character",
        }
    }

    /// Entity name of a favorite of this kind, e.g. `"Favorite planet"`.
    pub fn favorite_name(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Favorite planet",
            FavoriteKind::Character => "Favorite character",
        }
    }
}

/// The single entity a favorite row references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(DbId),
    Character(DbId),
}

impl FavoriteTarget {
    pub fn kind(self) -> FavoriteKind {
        match self {
            FavoriteTarget::Planet(_) => FavoriteKind::Planet,
            FavoriteTarget::Character(_) => FavoriteKind::Character,
        }
    }

    pub fn id(self) -> DbId {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::Character(id) => id,
        }
    }

    /// Split into the `(planet_id, character_id)` column pair.
    pub fn columns(self) -> (Option<DbId>, Option<DbId>) {
        match self {
            FavoriteTarget::Planet(id) => (Some(id), None),
            FavoriteTarget::Character(id) => (None, Some(id)),
        }
    }
}
