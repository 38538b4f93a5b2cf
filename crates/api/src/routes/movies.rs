//! Route definitions for movie endpoints, including cast management.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /movies                          -> list_movies
/// POST   /movies                          -> create_movie
/// PATCH  /movies/{id}                     -> update_movie
/// DELETE /movies/{id}                     -> delete_movie
/// GET    /movies/{id}/actors              -> list_cast
/// POST   /movies/{id}/actors              -> add_cast_member
/// DELETE /movies/{id}/actors/{actor_id}   -> remove_cast_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route(
            "/movies/{id}",
            patch(movies::update_movie).delete(movies::delete_movie),
        )
        .route(
            "/movies/{id}/actors",
            get(movies::list_cast).post(movies::add_cast_member),
        )
        .route(
            "/movies/{id}/actors/{actor_id}",
            delete(movies::remove_cast_member),
        )
}
