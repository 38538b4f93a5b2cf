//! Handlers for actor endpoints.
//!
//! Every endpoint requires a bearer token carrying the matching
//! `<verb>:actors` permission scope. Mutating endpoints respond with the
//! affected id and the refreshed collection.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::scopes;
use marquee_core::types::DbId;
use marquee_db::models::actor::{CreateActor, UpdateActor};
use marquee_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{ActorsResponse, MoviesResponse};
use crate::state::AppState;

/// GET /actors
///
/// List all actors. Requires `get:actors`.
pub async fn list_actors(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::GET_ACTORS)?;

    let actors = ActorRepo::list_all(&state.pool).await?;

    Ok(Json(ActorsResponse::listing(actors)))
}

/// POST /actors
///
/// Create an actor. Requires `post:actors`.
///
/// A missing or malformed body is a 400; a body whose fields have the
/// wrong type, or an empty name, is a 422.
pub async fn create_actor(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateActor>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::POST_ACTORS)?;

    let Json(input) = payload?;
    validate_required_text("name", &input.name)?;

    let actor = ActorRepo::create(&state.pool, &input).await?;

    tracing::info!(actor_id = actor.id, "Actor created");

    let actors = ActorRepo::list_all(&state.pool).await?;
    Ok(Json(ActorsResponse::created(actor.id, actors)))
}

/// PATCH /actors/{id}
///
/// Partially update an actor. Requires `patch:actors`.
/// Fails with 422 when no actor with the given id exists.
pub async fn update_actor(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
    payload: Result<Json<UpdateActor>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::PATCH_ACTORS)?;

    let Json(input) = payload?;
    if let Some(name) = &input.name {
        validate_required_text("name", name)?;
    }

    let actor = ActorRepo::update(&state.pool, actor_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::MissingRecord {
            entity: "Actor",
            id: actor_id,
        }))?;

    tracing::info!(actor_id = actor.id, "Actor updated");

    let actors = ActorRepo::list_all(&state.pool).await?;
    Ok(Json(ActorsResponse::updated(actor.id, actors)))
}

/// DELETE /actors/{id}
///
/// Delete an actor. Requires `delete:actors`.
/// Fails with 422 when no actor with the given id exists.
pub async fn delete_actor(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::DELETE_ACTORS)?;

    let deleted = ActorRepo::delete(&state.pool, actor_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::MissingRecord {
            entity: "Actor",
            id: actor_id,
        }));
    }

    tracing::info!(actor_id, "Actor deleted");

    let actors = ActorRepo::list_all(&state.pool).await?;
    Ok(Json(ActorsResponse::deleted(actor_id, actors)))
}

/// GET /actors/{id}/movies
///
/// List the movies an actor is cast in. Requires `get:movies`.
/// Fails with 422 when no actor with the given id exists.
pub async fn list_actor_movies(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    auth.require(scopes::GET_MOVIES)?;

    ActorRepo::find_by_id(&state.pool, actor_id)
        .await?
        .ok_or(AppError::Core(CoreError::MissingRecord {
            entity: "Actor",
            id: actor_id,
        }))?;

    let movies = ActorRepo::movies_for(&state.pool, actor_id).await?;

    Ok(Json(MoviesResponse::listing(movies)))
}

/// Required text fields must be non-empty after trimming.
pub(crate) fn validate_required_text(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} must not be empty"
        ))));
    }
    Ok(())
}
