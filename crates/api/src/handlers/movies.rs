//! Handlers for movie endpoints, including cast management.
//!
//! Every endpoint requires a bearer token carrying the matching permission
//! scope. Cast links live in the `actor_movies` join table; adding a link
//! twice is a no-op.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::scopes;
use marquee_core::types::DbId;
use marquee_db::models::movie::{AddCastMember, CreateMovie, UpdateMovie};
use marquee_db::repositories::{ActorRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::actors::validate_required_text;
use crate::middleware::auth::AuthUser;
use crate::response::{ActorsResponse, MoviesResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Movie CRUD
// ---------------------------------------------------------------------------

/// GET /movies
///
/// List all movies. Requires `get:movies`.
pub async fn list_movies(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::GET_MOVIES)?;

    let movies = MovieRepo::list_all(&state.pool).await?;

    Ok(Json(MoviesResponse::listing(movies)))
}

/// POST /movies
///
/// Create a movie. Requires `post:movies`.
///
/// A missing or malformed body is a 400; a body whose fields have the
/// wrong type, an empty title, or a duplicate title is a 422.
pub async fn create_movie(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateMovie>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::POST_MOVIES)?;

    let Json(input) = payload?;
    validate_required_text("title", &input.title)?;

    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = movie.id, "Movie created");

    let movies = MovieRepo::list_all(&state.pool).await?;
    Ok(Json(MoviesResponse::created(movie.id, movies)))
}

/// PATCH /movies/{id}
///
/// Partially update a movie. Requires `patch:movies`.
/// Fails with 422 when no movie with the given id exists.
pub async fn update_movie(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    payload: Result<Json<UpdateMovie>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::PATCH_MOVIES)?;

    let Json(input) = payload?;
    if let Some(title) = &input.title {
        validate_required_text("title", title)?;
    }

    let movie = MovieRepo::update(&state.pool, movie_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::MissingRecord {
            entity: "Movie",
            id: movie_id,
        }))?;

    tracing::info!(movie_id = movie.id, "Movie updated");

    let movies = MovieRepo::list_all(&state.pool).await?;
    Ok(Json(MoviesResponse::updated(movie.id, movies)))
}

/// DELETE /movies/{id}
///
/// Delete a movie. Requires `delete:movies`.
/// Fails with 422 when no movie with the given id exists.
pub async fn delete_movie(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::DELETE_MOVIES)?;

    let deleted = MovieRepo::delete(&state.pool, movie_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::MissingRecord {
            entity: "Movie",
            id: movie_id,
        }));
    }

    tracing::info!(movie_id, "Movie deleted");

    let movies = MovieRepo::list_all(&state.pool).await?;
    Ok(Json(MoviesResponse::deleted(movie_id, movies)))
}

// ---------------------------------------------------------------------------
// Cast management
// ---------------------------------------------------------------------------

/// GET /movies/{id}/actors
///
/// List a movie's cast. Requires `get:actors`.
/// Fails with 422 when no movie with the given id exists.
pub async fn list_cast(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::GET_ACTORS)?;

    MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::MissingRecord {
            entity: "Movie",
            id: movie_id,
        }))?;

    let cast = MovieRepo::cast_for(&state.pool, movie_id).await?;

    Ok(Json(ActorsResponse::listing(cast)))
}

/// POST /movies/{id}/actors
///
/// Add an actor to a movie's cast. Requires `patch:movies`.
/// Fails with 422 when either side of the link does not exist.
pub async fn add_cast_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    payload: Result<Json<AddCastMember>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::PATCH_MOVIES)?;

    let Json(input) = payload?;

    MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::MissingRecord {
            entity: "Movie",
            id: movie_id,
        }))?;
    ActorRepo::find_by_id(&state.pool, input.actor_id)
        .await?
        .ok_or(AppError::Core(CoreError::MissingRecord {
            entity: "Actor",
            id: input.actor_id,
        }))?;

    let linked = MovieRepo::add_cast_member(&state.pool, movie_id, input.actor_id).await?;
    if linked {
        tracing::info!(movie_id, actor_id = input.actor_id, "Cast member added");
    }

    let cast = MovieRepo::cast_for(&state.pool, movie_id).await?;
    Ok(Json(ActorsResponse::listing(cast)))
}

/// DELETE /movies/{id}/actors/{actor_id}
///
/// Remove an actor from a movie's cast. Requires `patch:movies`.
/// Fails with 422 when no such link exists.
pub async fn remove_cast_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((movie_id, actor_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::PATCH_MOVIES)?;

    let removed = MovieRepo::remove_cast_member(&state.pool, movie_id, actor_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::MissingRecord {
            entity: "CastMember",
            id: actor_id,
        }));
    }

    tracing::info!(movie_id, actor_id, "Cast member removed");

    let cast = MovieRepo::cast_for(&state.pool, movie_id).await?;
    Ok(Json(ActorsResponse::listing(cast)))
}
