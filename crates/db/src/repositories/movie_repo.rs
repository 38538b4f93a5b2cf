//! Repository for the `movies` table and the `actor_movies` join table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::Actor;
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, release_date, created_at, updated_at";

/// Provides CRUD operations for movies and their cast links.
pub struct MovieRepo;

impl MovieRepo {
    /// List all movies, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new movie, returning the created row.
    ///
    /// Titles are unique; a duplicate raises the `uq_movies_title`
    /// constraint, classified by the API layer.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, release_date)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.release_date)
            .fetch_one(pool)
            .await
    }

    /// Partially update a movie. Absent fields keep their current value.
    /// Returns `None` when no movie with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                release_date = COALESCE($3, release_date),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.release_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie. Returns `true` when a row was removed.
    ///
    /// Casting links referencing the movie are removed by `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the actors cast in a movie, oldest first.
    pub async fn cast_for(pool: &PgPool, movie_id: DbId) -> Result<Vec<Actor>, sqlx::Error> {
        let query = "SELECT a.id, a.name, a.age, a.gender, a.created_at, a.updated_at
             FROM actors a
             JOIN actor_movies am ON am.actor_id = a.id
             WHERE am.movie_id = $1
             ORDER BY a.id";
        sqlx::query_as::<_, Actor>(query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Link an actor to a movie's cast. A pairing is unique, so repeating
    /// the link is a no-op; returns `true` when a new link was made.
    pub async fn add_cast_member(
        pool: &PgPool,
        movie_id: DbId,
        actor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO actor_movies (actor_id, movie_id)
             VALUES ($1, $2)
             ON CONFLICT (actor_id, movie_id) DO NOTHING",
        )
        .bind(actor_id)
        .bind(movie_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove an actor from a movie's cast. Returns `true` when a link
    /// was removed.
    pub async fn remove_cast_member(
        pool: &PgPool,
        movie_id: DbId,
        actor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM actor_movies WHERE actor_id = $1 AND movie_id = $2",
        )
        .bind(actor_id)
        .bind(movie_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
