use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: i64 },
    #[error("{entity_type} identifiers exhausted")]
    IdsExhausted { entity_type: &'static str },
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl RepositoryError {
    /// Shorthand for a missing calendar.
    pub fn calendar_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Calendar",
            id,
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
