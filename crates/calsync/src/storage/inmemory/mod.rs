//! In-memory storage backend.
//!
//! Stores every calendar in a `HashMap` guarded, together with the identifier
//! counter, by a single `Arc<RwLock<_>>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use calsync::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let calendar = repo.create_calendar("Work".into(), 1).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
