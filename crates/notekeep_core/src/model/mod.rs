//! Domain model for notes.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and controller.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod note;
pub mod priority;
