//! Shared response envelope types for API handlers.
//!
//! Listing endpoints that carry a human-readable message use
//! `{ "message": ..., "result": ... }`; mutations that only confirm use
//! `{ "message": ... }`. Errors never use these; see [`crate::error`].

use serde::Serialize;

/// `{ "message": String, "result": T }` envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ResultResponse::new("These are your users", users)))
/// ```
#[derive(Debug, Serialize)]
pub struct ResultResponse<T: Serialize> {
    pub message: String,
    pub result: T,
}

impl<T: Serialize> ResultResponse<T> {
    pub fn new(message: impl Into<String>, result: T) -> Self {
        Self {
            message: message.into(),
            result,
        }
    }
}

/// `{ "message": String }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
