//! Response envelope types for the casting API.
//!
//! Every successful response carries `success: true`, the full current
//! collection for the resource, and its count. Mutating endpoints add the
//! affected id under `created`, `updated`, or `deleted`. Use these instead
//! of ad-hoc `serde_json::json!` so the wire contract stays in one place.

use marquee_core::types::DbId;
use marquee_db::models::actor::Actor;
use marquee_db::models::movie::Movie;
use serde::Serialize;

/// Envelope for actor collections.
#[derive(Debug, Serialize)]
pub struct ActorsResponse {
    pub success: bool,
    pub actors: Vec<Actor>,
    pub number_of_actors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<DbId>,
}

impl ActorsResponse {
    /// Envelope for plain listings.
    pub fn listing(actors: Vec<Actor>) -> Self {
        Self {
            success: true,
            number_of_actors: actors.len(),
            actors,
            created: None,
            updated: None,
            deleted: None,
        }
    }

    /// Envelope for a successful create.
    pub fn created(id: DbId, actors: Vec<Actor>) -> Self {
        Self {
            created: Some(id),
            ..Self::listing(actors)
        }
    }

    /// Envelope for a successful update.
    pub fn updated(id: DbId, actors: Vec<Actor>) -> Self {
        Self {
            updated: Some(id),
            ..Self::listing(actors)
        }
    }

    /// Envelope for a successful delete.
    pub fn deleted(id: DbId, actors: Vec<Actor>) -> Self {
        Self {
            deleted: Some(id),
            ..Self::listing(actors)
        }
    }
}

/// Envelope for movie collections.
#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
    pub number_of_movies: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<DbId>,
}

impl MoviesResponse {
    /// Envelope for plain listings.
    pub fn listing(movies: Vec<Movie>) -> Self {
        Self {
            success: true,
            number_of_movies: movies.len(),
            movies,
            created: None,
            updated: None,
            deleted: None,
        }
    }

    /// Envelope for a successful create.
    pub fn created(id: DbId, movies: Vec<Movie>) -> Self {
        Self {
            created: Some(id),
            ..Self::listing(movies)
        }
    }

    /// Envelope for a successful update.
    pub fn updated(id: DbId, movies: Vec<Movie>) -> Self {
        Self {
            updated: Some(id),
            ..Self::listing(movies)
        }
    }

    /// Envelope for a successful delete.
    pub fn deleted(id: DbId, movies: Vec<Movie>) -> Self {
        Self {
            deleted: Some(id),
            ..Self::listing(movies)
        }
    }
}
