use crate::types::DbId;

/// Failures the favorites domain can report, independent of transport.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A planet, character, or favorite with this id does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
