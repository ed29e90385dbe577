use thiserror::Error;

/// Errors surfaced by the domain services.
///
/// A closed set: every failure that leaves a service is one of these kinds,
/// and each kind maps to exactly one HTTP status code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Error for persistence adapters.
///
/// Never crosses a service boundary; services wrap it into a [`DomainError`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
