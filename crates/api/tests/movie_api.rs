//! HTTP-level integration tests for the movie endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    assistant_token, body_json, delete, director_token, get, patch_json, post_empty, post_json,
    producer_token, seed_movie,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_all_movies(pool: PgPool) {
    seed_movie(&pool, "War of the Worlds", "1985-07-03").await;
    seed_movie(&pool, "Gia", "1998-11-23").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/movies", &assistant_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["number_of_movies"], 2);
    assert_eq!(json["movies"][0]["title"], "War of the Worlds");
    assert_eq!(json["movies"][0]["release"], "1985-07-03");
}

// ---------------------------------------------------------------------------
// POST /movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/movies",
        &producer_token(),
        serde_json::json!({"title": "War of the Worlds", "release": "1985-07-03"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["created"].is_number());
    assert_eq!(json["number_of_movies"], 1);
    assert_eq!(json["movies"][0]["title"], "War of the Worlds");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_400_if_create_movie_fails_from_empty_form(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_empty(app, "/movies", &producer_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "bad request");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_422_if_create_movie_fails_from_bad_release_date(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/movies",
        &producer_token(),
        serde_json::json!({"title": "John Carter", "release": "!"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "unprocessable");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_422_if_create_movie_fails_from_duplicate_title(pool: PgPool) {
    seed_movie(&pool, "Gia", "1998-11-23").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/movies",
        &producer_token(),
        serde_json::json!({"title": "Gia", "release": "1998-11-23"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "unprocessable");
}

// ---------------------------------------------------------------------------
// PATCH /movies/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_movie(pool: PgPool) {
    let movie = seed_movie(&pool, "Gla", "1998-01-01").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/movies/{}", movie.id),
        &director_token(),
        serde_json::json!({"title": "Gia", "release": "1998-11-23"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["updated"], movie.id);
    assert_eq!(json["number_of_movies"], 1);

    // Round-trip: a follow-up GET reflects exactly the updated fields.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/movies", &assistant_token()).await).await;
    assert_eq!(json["movies"][0]["title"], "Gia");
    assert_eq!(json["movies"][0]["release"], "1998-11-23");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_movie_partial_body_keeps_other_fields(pool: PgPool) {
    let movie = seed_movie(&pool, "Predator 2", "1990-11-21").await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/movies/{}", movie.id),
        &director_token(),
        serde_json::json!({"release": "1990-12-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["movies"][0]["title"], "Predator 2");
    assert_eq!(json["movies"][0]["release"], "1990-12-01");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_422_if_update_movie_fails_from_bad_form(pool: PgPool) {
    let movie = seed_movie(&pool, "Predator 2", "1990-11-21").await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/movies/{}", movie.id),
        &director_token(),
        serde_json::json!({"release": "!"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "unprocessable");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_422_if_movie_to_update_does_not_exist(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/movies/100",
        &director_token(),
        serde_json::json!({"title": "Nobody Home"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "unprocessable");
}

// ---------------------------------------------------------------------------
// DELETE /movies/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_movie(pool: PgPool) {
    let keep = seed_movie(&pool, "Keep Me", "2000-01-01").await;
    let doomed = seed_movie(&pool, "Delete Me", "2001-01-01").await;

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/movies/{}", doomed.id), &producer_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted"], doomed.id);
    assert_eq!(json["number_of_movies"], 1);
    assert_eq!(json["movies"][0]["id"], keep.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_422_if_movie_to_delete_does_not_exist(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/movies/100", &producer_token()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "unprocessable");
}
