//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `IdsExhausted` -> 500 (Internal Server Error)
/// - `QueryFailed` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use calsync_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::calendar_not_found(1);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::IdsExhausted { .. } => 500,
        RepositoryError::QueryFailed(_) => 500,
    }
}
