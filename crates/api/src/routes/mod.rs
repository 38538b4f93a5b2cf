pub mod actors;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /actors                          GET list, POST create
/// /actors/{id}                     PATCH update, DELETE remove
/// /actors/{id}/movies              GET movies the actor is cast in
///
/// /movies                          GET list, POST create
/// /movies/{id}                     PATCH update, DELETE remove
/// /movies/{id}/actors              GET cast, POST add cast member
/// /movies/{id}/actors/{actor_id}   DELETE remove cast member
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(actors::router())
        .merge(movies::router())
}
