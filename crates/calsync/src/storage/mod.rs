//! Storage backend implementations.
//!
//! Concrete implementations of the [`calsync_core::storage::CalendarRepository`]
//! contract. Only the in-memory backend exists; records do not survive a
//! process restart.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
