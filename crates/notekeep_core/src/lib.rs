//! Core domain logic for NoteKeep.
//! This crate owns the note collection and its invariants.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::NoteKeepConfig;
pub use controller::notes_controller::{NoteRow, NotesController, Notice};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{now_epoch_ms, Note, NoteId, NoteValidationError};
pub use model::priority::{classify_priority, Priority, PriorityColor, StoredPriority};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::note_store::{NoteStore, NoteStoreError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
