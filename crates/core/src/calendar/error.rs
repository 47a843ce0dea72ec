use thiserror::Error;

/// Errors that can occur when validating calendar input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Calendar name is required")]
    MissingName,
    #[error("Calendar name cannot be empty")]
    EmptyName,
    #[error("Calendar owner_id is required")]
    MissingOwnerId,
}
