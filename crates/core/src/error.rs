use crate::types::DbId;

/// Domain-level error type shared by the db and api crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id came back empty.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// User input was rejected before any store call.
    #[error("{0}")]
    Validation(String),

    /// Something went wrong that the user cannot fix.
    #[error("{0}")]
    Internal(String),
}
