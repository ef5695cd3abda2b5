//! Domain primitives shared by the database and API crates.

pub mod error;
pub mod favorite;
pub mod types;
