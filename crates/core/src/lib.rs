//! Functional core for calsync.
//!
//! Pure data types, validation and storage contracts with no I/O. The server
//! crate provides the imperative shell (HTTP, in-memory storage, bootstrap).

pub mod calendar;
pub mod storage;
