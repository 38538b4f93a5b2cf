//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the production router (same middleware stack) on top of an
//! isolated per-test database, and mints bearer tokens for each of the
//! three roles the identity provider defines. Requests go straight to the
//! router via `tower::ServiceExt` -- no TCP listener involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use chrono::NaiveDate;
use marquee_api::auth::jwt::{issue_token, JwtConfig};
use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_core::scopes;
use marquee_db::models::actor::{Actor, CreateActor};
use marquee_db::models::movie::{CreateMovie, Movie};
use marquee_db::repositories::{ActorRepo, MovieRepo};

/// Signing secret used by every test token. Not a production value.
pub const TEST_JWT_SECRET: &str = "marquee-test-secret-not-for-production";

/// Build a test `ServerConfig` with safe defaults and the test JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This calls the same `build_app_router` as `main.rs`, so integration
/// tests exercise the middleware stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Role tokens
// ---------------------------------------------------------------------------

/// Scopes granted to the casting assistant role (read-only).
pub fn assistant_permissions() -> Vec<&'static str> {
    vec![scopes::GET_ACTORS, scopes::GET_MOVIES]
}

/// Scopes granted to the casting director role (everything except
/// creating and deleting movies).
pub fn director_permissions() -> Vec<&'static str> {
    vec![
        scopes::GET_ACTORS,
        scopes::GET_MOVIES,
        scopes::POST_ACTORS,
        scopes::PATCH_ACTORS,
        scopes::DELETE_ACTORS,
        scopes::PATCH_MOVIES,
    ]
}

/// Scopes granted to the executive producer role (everything).
pub fn producer_permissions() -> Vec<&'static str> {
    vec![
        scopes::GET_ACTORS,
        scopes::GET_MOVIES,
        scopes::POST_ACTORS,
        scopes::PATCH_ACTORS,
        scopes::DELETE_ACTORS,
        scopes::POST_MOVIES,
        scopes::PATCH_MOVIES,
        scopes::DELETE_MOVIES,
    ]
}

/// Mint a token carrying exactly the given permission scopes.
pub fn token_with(permissions: &[&str]) -> String {
    let config = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry_mins: 15,
    };
    issue_token("auth0|test-user", permissions, &config).expect("token minting should succeed")
}

/// Mint a token that expired well past the validation leeway.
pub fn expired_token(permissions: &[&str]) -> String {
    let config = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry_mins: -10,
    };
    issue_token("auth0|test-user", permissions, &config).expect("token minting should succeed")
}

pub fn assistant_token() -> String {
    token_with(&assistant_permissions())
}

pub fn director_token() -> String {
    token_with(&director_permissions())
}

pub fn producer_token() -> String {
    token_with(&producer_permissions())
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// Insert an actor directly through the repository layer.
pub async fn seed_actor(pool: &PgPool, name: &str, age: i32, gender: Option<&str>) -> Actor {
    let input = CreateActor {
        name: name.to_string(),
        age,
        gender: gender.map(|g| g.to_string()),
    };
    ActorRepo::create(pool, &input)
        .await
        .expect("actor seeding should succeed")
}

/// Insert a movie directly through the repository layer.
pub async fn seed_movie(pool: &PgPool, title: &str, release: &str) -> Movie {
    let input = CreateMovie {
        title: title.to_string(),
        release_date: release.parse::<NaiveDate>().expect("valid date literal"),
    };
    MovieRepo::create(pool, &input)
        .await
        .expect("movie seeding should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with an optional bearer token and optional JSON body.
async fn request(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: &str) -> Response {
    request(app, "GET", uri, Some(token), None).await
}

/// GET with no Authorization header at all.
pub async fn get_unauthed(app: Router, uri: &str) -> Response {
    request(app, "GET", uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    request(app, "POST", uri, Some(token), Some(body)).await
}

/// POST with no body and no content type, like an empty form submission.
pub async fn post_empty(app: Router, uri: &str, token: &str) -> Response {
    request(app, "POST", uri, Some(token), None).await
}

pub async fn patch_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    request(app, "PATCH", uri, Some(token), Some(body)).await
}

/// PATCH with no body and no content type.
pub async fn patch_empty(app: Router, uri: &str, token: &str) -> Response {
    request(app, "PATCH", uri, Some(token), None).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response {
    request(app, "DELETE", uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
