use crate::types::DbId;

/// Domain-level errors raised below the HTTP layer.
///
/// The api crate maps each variant to an HTTP status and the uniform
/// `{"success": false, "message": ...}` error body.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An operation targeted a record that does not exist. The API contract
    /// renders this as 422, for deletes and updates alike.
    #[error("No such record: {entity} with id {id}")]
    MissingRecord { entity: &'static str, id: DbId },

    /// A payload field failed a semantic check (empty required text, etc.).
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
