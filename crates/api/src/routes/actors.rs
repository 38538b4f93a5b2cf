//! Route definitions for actor endpoints.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Actor routes mounted at `/actors`.
///
/// ```text
/// GET    /actors               -> list_actors
/// POST   /actors               -> create_actor
/// PATCH  /actors/{id}          -> update_actor
/// DELETE /actors/{id}          -> delete_actor
/// GET    /actors/{id}/movies   -> list_actor_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/actors",
            get(actors::list_actors).post(actors::create_actor),
        )
        .route(
            "/actors/{id}",
            patch(actors::update_actor).delete(actors::delete_actor),
        )
        .route("/actors/{id}/movies", get(actors::list_actor_movies))
}
