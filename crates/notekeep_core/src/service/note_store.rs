//! Note store use-case service.
//!
//! # Responsibility
//! - Expose create/list/toggle-favorite/delete over a `NoteRepository`.
//! - Collapse repository failures into the caller-facing error taxonomy.
//! - Emit one metadata-only log event per operation.
//!
//! # Invariants
//! - Every write is all-or-nothing: on error nothing becomes visible in
//!   `list()`, and previously visible notes stay unchanged.
//! - `create` returns the row as committed, read back inside the insert
//!   transaction.
//! - Note titles never reach the logs.

use crate::model::note::{Note, NoteId};
use crate::model::priority::Priority;
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Error returned by note store operations.
#[derive(Debug)]
pub enum NoteStoreError {
    /// No note has the requested id.
    NotFound(NoteId),
    /// The durable read/write could not complete.
    Persistence(RepoError),
}

impl NoteStoreError {
    /// Stable machine-readable code used in logs and FFI responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Persistence(_) => "persistence",
        }
    }
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Persistence(err) => write!(f, "note storage failed: {err}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for NoteStoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Persistence(other),
        }
    }
}

/// Durable note collection with one fixed ordering.
pub struct NoteStore<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteStore<R> {
    /// Creates a store over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves a new note with `is_favorite = false` and the current time.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        priority: Priority,
    ) -> Result<Note, NoteStoreError> {
        let started_at = Instant::now();
        let note = Note::new(title, priority);
        let result = self.repo.insert_note(&note).map_err(NoteStoreError::from);
        log_outcome("note_create", note.id, started_at, &result);
        result
    }

    /// Returns every note, newest `date_created` first.
    pub fn list(&self) -> Result<Vec<Note>, NoteStoreError> {
        let started_at = Instant::now();
        let result = self.repo.list_notes().map_err(NoteStoreError::from);

        match &result {
            Ok(notes) => debug!(
                "event=note_list module=store status=ok count={} duration_ms={}",
                notes.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=note_list module=store status=error error_code={} duration_ms={} error={}",
                err.code(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Gets one note by stable id.
    pub fn get(&self, id: NoteId) -> Result<Option<Note>, NoteStoreError> {
        Ok(self.repo.get_note(id)?)
    }

    /// Flips the favorite flag and returns the committed note.
    pub fn toggle_favorite(&mut self, id: NoteId) -> Result<Note, NoteStoreError> {
        let started_at = Instant::now();
        let result = self.repo.toggle_favorite(id).map_err(NoteStoreError::from);
        log_outcome("note_toggle_favorite", id, started_at, &result);
        result
    }

    /// Permanently removes one note.
    pub fn delete(&self, id: NoteId) -> Result<(), NoteStoreError> {
        let started_at = Instant::now();
        let result = self.repo.delete_note(id).map_err(NoteStoreError::from);
        log_outcome("note_delete", id, started_at, &result);
        result
    }
}

fn log_outcome<T>(
    event: &str,
    note_id: NoteId,
    started_at: Instant,
    result: &Result<T, NoteStoreError>,
) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(_) => info!(
            "event={event} module=store status=ok note_id={note_id} duration_ms={duration_ms}"
        ),
        Err(err) => warn!(
            "event={} module=store status=error note_id={} duration_ms={} error_code={} error={}",
            event,
            note_id,
            duration_ms,
            err.code(),
            err
        ),
    }
}
