//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found with id: {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("{entity_type} not found with {field}: {value}")]
    NotFoundBy {
        entity_type: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Illegal state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: i64) -> Self {
        Self::NotFound { entity_type, id }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Result alias used by the services.
pub type DomainResult<T> = Result<T, DomainError>;
