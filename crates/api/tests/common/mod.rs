#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use holonet_api::auth::jwt::{generate_access_token, JwtConfig};
use holonet_api::config::ServerConfig;
use holonet_api::router::build_app_router;
use holonet_api::state::AppState;
use holonet_db::models::character::{Character, CreateCharacter};
use holonet_db::models::planet::{CreatePlanet, Planet};
use holonet_db::models::user::{CreateUser, User};
use holonet_db::repositories::{CharacterRepo, PlanetRepo, UserRepo};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given pool, with the same
/// middleware stack production uses.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_user(pool: &SqlitePool, email: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$v=19$placeholder".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

pub async fn create_planet(pool: &SqlitePool, name: &str) -> Planet {
    let input = CreatePlanet {
        name: name.to_string(),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        population: Some("200000".to_string()),
        ..Default::default()
    };
    PlanetRepo::create(pool, &input)
        .await
        .expect("planet creation should succeed")
}

pub async fn create_character(pool: &SqlitePool, name: &str) -> Character {
    let input = CreateCharacter {
        name: name.to_string(),
        gender: Some("male".to_string()),
        birth_year: Some("19BBY".to_string()),
        ..Default::default()
    };
    CharacterRepo::create(pool, &input)
        .await
        .expect("character creation should succeed")
}

/// A valid bearer token for `user_id`, signed with the test secret.
pub fn token_for(user_id: i64) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token)).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
