use super::error::CalendarError;

/// Validates a calendar name before creation or update.
///
/// Only the empty string is rejected. Whitespace is kept as given.
pub fn validate_calendar_name(name: &str) -> Result<(), CalendarError> {
    if name.is_empty() {
        return Err(CalendarError::EmptyName);
    }
    Ok(())
}
