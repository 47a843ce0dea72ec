//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use calsync_core::calendar::{Calendar, CalendarId, OwnerId};
use calsync_core::storage::{CalendarRepository, RepositoryError, Result};

const FIRST_CALENDAR_ID: CalendarId = 1;

/// Records plus the next identifier to hand out.
///
/// Both live behind the same lock so allocation and insertion happen as one
/// step.
#[derive(Debug)]
struct Store {
    calendars: HashMap<CalendarId, Calendar>,
    next_id: CalendarId,
}

/// In-memory storage backend.
///
/// Identifiers come from a counter that only moves forward, so an id freed by
/// a delete is never handed out again. Data is lost when the last clone of the
/// repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::starting_at(FIRST_CALENDAR_ID)
    }

    fn starting_at(next_id: CalendarId) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                calendars: HashMap::new(),
                next_id,
            })),
        }
    }

    /// Number of calendars currently stored.
    pub async fn len(&self) -> usize {
        self.store.read().await.calendars.len()
    }
}

#[async_trait]
impl CalendarRepository for InMemoryRepository {
    async fn create_calendar(&self, name: String, owner_id: OwnerId) -> Result<Calendar> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id = id.checked_add(1).ok_or(RepositoryError::IdsExhausted {
            entity_type: "Calendar",
        })?;

        let calendar = Calendar::new(id, name, owner_id);
        store.calendars.insert(id, calendar.clone());
        Ok(calendar)
    }

    async fn get_calendar(&self, id: CalendarId) -> Result<Calendar> {
        let store = self.store.read().await;
        store
            .calendars
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::calendar_not_found(id))
    }

    async fn list_calendars(&self) -> Result<Vec<Calendar>> {
        let store = self.store.read().await;
        let mut calendars: Vec<Calendar> = store.calendars.values().cloned().collect();
        calendars.sort_by_key(|calendar| calendar.id);
        Ok(calendars)
    }

    async fn update_calendar(&self, id: CalendarId, name: String) -> Result<Calendar> {
        let mut store = self.store.write().await;
        let calendar = store
            .calendars
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::calendar_not_found(id))?;

        calendar.name = name;
        Ok(calendar.clone())
    }

    async fn delete_calendar(&self, id: CalendarId) -> Result<()> {
        let mut store = self.store.write().await;
        if store.calendars.remove(&id).is_none() {
            return Err(RepositoryError::calendar_not_found(id));
        }
        Ok(())
    }
}
