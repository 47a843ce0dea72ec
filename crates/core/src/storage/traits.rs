use async_trait::async_trait;

use crate::calendar::{Calendar, CalendarId, OwnerId};

use super::Result;

/// Repository for calendar operations.
///
/// This is the only storage surface the HTTP layer depends on. Implementations
/// own their records and hand out clones.
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Creates a calendar, allocating a fresh identifier for it.
    async fn create_calendar(&self, name: String, owner_id: OwnerId) -> Result<Calendar>;

    /// Gets a calendar by its ID.
    async fn get_calendar(&self, id: CalendarId) -> Result<Calendar>;

    /// Lists every stored calendar. Order is unspecified.
    async fn list_calendars(&self) -> Result<Vec<Calendar>>;

    /// Replaces the name of an existing calendar.
    async fn update_calendar(&self, id: CalendarId, name: String) -> Result<Calendar>;

    /// Deletes a calendar by its ID.
    async fn delete_calendar(&self, id: CalendarId) -> Result<()>;
}
