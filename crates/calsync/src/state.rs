//! Shared application state.
//!
//! Handlers only see the storage contract, never a concrete backend, so any
//! [`CalendarRepository`] can be plugged in (tests use failing substitutes).

use std::sync::Arc;

use calsync_core::storage::CalendarRepository;

use crate::{config::Config, storage::InMemoryRepository};

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Calendar repository.
    pub calendar_repo: Arc<dyn CalendarRepository>,
    /// Runtime configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState from a repository and configuration.
    pub fn new(calendar_repo: Arc<dyn CalendarRepository>, config: Config) -> Self {
        Self {
            calendar_repo,
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()), Config::default())
    }
}
