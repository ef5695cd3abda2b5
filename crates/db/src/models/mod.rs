//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and a `Deserialize` create DTO. Only `favorite` and the reference
//! entities are serialized directly; users go through `UserResponse`.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
