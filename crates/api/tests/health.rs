//! Integration tests for the health check, the sitemap, and general HTTP
//! behaviour of the middleware stack.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, create_character, create_planet, get};
use holonet_api::routes::ROUTES;
use sqlx::SqlitePool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: GET / lists every route
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sitemap_lists_all_routes(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["result"].as_array().unwrap();
    assert_eq!(entries.len(), ROUTES.len());
    assert!(entries
        .iter()
        .any(|e| e["method"] == "DELETE" && e["path"] == "/favorite/people/{people_id}"));
    assert!(entries
        .iter()
        .all(|e| e["description"].as_str().is_some_and(|d| !d.is_empty())));
}

/// Every advertised route is actually mounted: requesting it never yields
/// 404 or 405 from the router itself.
#[sqlx::test(migrations = "../../db/migrations")]
async fn sitemap_entries_are_routable(pool: SqlitePool) {
    let planet = create_planet(&pool, "Coruscant").await;
    let character = create_character(&pool, "Mace Windu").await;

    for &(method, path, _) in ROUTES {
        let uri = path
            .replace("{id}", &planet.id.to_string())
            .replace("{planet_id}", &planet.id.to_string())
            .replace("{people_id}", &character.id.to_string());
        let request = Request::builder()
            .method(Method::from_bytes(method.as_bytes()).unwrap())
            .uri(&uri)
            .body(Body::empty())
            .unwrap();

        let app = common::build_test_app(pool.clone());
        let response = app.oneshot(request).await.unwrap();

        assert_ne!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} {uri} is not mounted"
        );
        if response.status() == StatusCode::NOT_FOUND {
            // Router misses answer ROUTE_NOT_FOUND; handler 404s are NOT_FOUND.
            let json = body_json(response).await;
            assert_eq!(json["code"], "NOT_FOUND", "{method} {uri} is not mounted");
        }
    }
}

// ---------------------------------------------------------------------------
// Test: Router misses answer with the JSON envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404_envelope(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ROUTE_NOT_FOUND");
    assert_eq!(json["error"], "No route for /this-route-does-not-exist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_with_trailing_slash_returns_404_envelope(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/starships/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ROUTE_NOT_FOUND");
    assert_eq!(json["error"], "No route for /starships");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_method_returns_405_envelope(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(json["error"], "Method POST not allowed on this route");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_method_on_nested_route_returns_405_envelope(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/favorite/planet/1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // UUID string: 36 chars with hyphens.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_returns_correct_headers(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/favorite/planet/1")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "DELETE")
        .header("Access-Control-Request-Headers", "authorization")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:3000");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("DELETE"),
        "Allow-Methods should contain DELETE, got: {allow_methods}"
    );
}
