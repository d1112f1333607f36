//! Shared error type across shelfd crates.

use thiserror::Error;

/// Client-facing error kinds (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid input / missing or wrong-typed field.
    Validation,
    /// Unknown id on lookup or delete.
    NotFound,
    /// Internal server error.
    Internal,
}

impl ErrorKind {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ShelfError {
    /// Map internal error to a stable client-facing kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShelfError::Validation(_) => ErrorKind::Validation,
            ShelfError::NotFound(_) => ErrorKind::NotFound,
            ShelfError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(ShelfError::Validation("x".into()).kind().as_str(), "VALIDATION");
        assert_eq!(ShelfError::NotFound("x".into()).kind().as_str(), "NOT_FOUND");
        assert_eq!(ShelfError::Internal("x".into()).kind().as_str(), "INTERNAL");
    }
}
