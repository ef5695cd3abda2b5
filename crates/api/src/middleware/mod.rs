//! Request extractors that run before handlers.
//!
//! - [`auth::AuthUser`] -- Resolves the current user from a Bearer token.

pub mod auth;
