//! Extractors whose rejections render as [`AppError`].

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// [`axum::extract::Path`] with the JSON error envelope on rejection.
///
/// A segment that does not parse (`/character/abc`, or an id past `i64::MAX`)
/// becomes a 400 `BAD_REQUEST` instead of axum's plain-text body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
