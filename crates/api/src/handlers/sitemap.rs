//! Handler for `GET /`: a machine-readable list of every route.

use axum::Json;
use serde::Serialize;

use crate::response::ResultResponse;
use crate::routes::ROUTES;

/// One entry of the sitemap.
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// GET /
pub async fn sitemap() -> Json<ResultResponse<Vec<RouteInfo>>> {
    let routes = ROUTES
        .iter()
        .map(|&(method, path, description)| RouteInfo {
            method,
            path,
            description,
        })
        .collect();
    Json(ResultResponse::new("Available endpoints", routes))
}
