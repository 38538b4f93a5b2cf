//! Movie row struct, request DTOs, and the cast-link DTO.

use chrono::NaiveDate;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    /// Theatrical release date, carried on the wire as `release`
    /// in `YYYY-MM-DD` form.
    #[serde(rename = "release")]
    pub release_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    #[serde(rename = "release")]
    pub release_date: NaiveDate,
}

/// DTO for partially updating a movie. Absent fields keep their value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    #[serde(rename = "release")]
    pub release_date: Option<NaiveDate>,
}

/// DTO for adding an actor to a movie's cast.
#[derive(Debug, Clone, Deserialize)]
pub struct AddCastMember {
    pub actor_id: DbId,
}
