use serde::{Deserialize, Serialize};

/// Identifier assigned to a calendar by the store.
pub type CalendarId = i64;

/// Identifier of the entity owning a calendar.
pub type OwnerId = i64;

/// A named calendar belonging to an owner.
///
/// `id` and `owner_id` are fixed once the calendar has been stored; only the
/// name can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Calendar {
    pub id: CalendarId,
    pub name: String,
    pub owner_id: OwnerId,
}

impl Calendar {
    /// Creates a new calendar with the given id, name and owner.
    pub fn new(id: CalendarId, name: impl Into<String>, owner_id: OwnerId) -> Self {
        Self {
            id,
            name: name.into(),
            owner_id,
        }
    }
}
