//! Permission scopes enforced by the HTTP API.
//!
//! Scopes follow the `<verb>:<resource>` convention and arrive in the
//! `permissions` claim of an access token. Which roles hold which scopes is
//! identity-provider configuration, not application code.

pub const GET_ACTORS: &str = "get:actors";
pub const POST_ACTORS: &str = "post:actors";
pub const PATCH_ACTORS: &str = "patch:actors";
pub const DELETE_ACTORS: &str = "delete:actors";

pub const GET_MOVIES: &str = "get:movies";
pub const POST_MOVIES: &str = "post:movies";
pub const PATCH_MOVIES: &str = "patch:movies";
pub const DELETE_MOVIES: &str = "delete:movies";
