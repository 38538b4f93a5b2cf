//! Actor row struct and request DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an actor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
}

/// DTO for partially updating an actor. Absent fields keep their value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}
