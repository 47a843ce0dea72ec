//! API request types for calendar operations.
//!
//! Fields are optional at the serde level so a missing field is reported as a
//! validation error rather than a decode failure.

use serde::{Deserialize, Serialize};

use super::error::CalendarError;
use super::operations::validate_calendar_name;
use super::types::OwnerId;

/// Request payload for creating a new calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCalendarRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<OwnerId>,
}

impl CreateCalendarRequest {
    /// Create a request with both required fields set.
    pub fn new(name: impl Into<String>, owner_id: OwnerId) -> Self {
        Self {
            name: Some(name.into()),
            owner_id: Some(owner_id),
        }
    }

    /// Validate the request and return the name and owner to store.
    pub fn validate(self) -> Result<(String, OwnerId), CalendarError> {
        let name = self.name.ok_or(CalendarError::MissingName)?;
        validate_calendar_name(&name)?;
        let owner_id = self.owner_id.ok_or(CalendarError::MissingOwnerId)?;
        Ok((name, owner_id))
    }
}

/// Request payload for renaming a calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCalendarRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UpdateCalendarRequest {
    /// Create a request carrying the new name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Validate the request and return the new name.
    pub fn validate(self) -> Result<String, CalendarError> {
        let name = self.name.ok_or(CalendarError::MissingName)?;
        validate_calendar_name(&name)?;
        Ok(name)
    }
}
