//! Repository layer for note persistence.
//!
//! # Responsibility
//! - Define the data access contract used by the note store.
//! - Isolate SQLite query details from store/controller orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - A failed write leaves no partial row state behind.

pub mod note_repo;
