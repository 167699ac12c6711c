//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted entity and its creation defaults.
//!
//! # Invariants
//! - `id` is never nil and never reused for another note.
//! - `date_created` is assigned once, at construction.
//! - `is_favorite` starts as `false`.

use crate::model::priority::{Priority, StoredPriority};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier of a note.
pub type NoteId = Uuid;

/// Model-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    NilId,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "note id must not be nil"),
        }
    }
}

impl Error for NoteValidationError {}

/// A saved note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Free-form, may be empty.
    pub title: String,
    pub priority: StoredPriority,
    pub is_favorite: bool,
    /// Unix epoch milliseconds; sole sort key.
    pub date_created: i64,
}

impl Note {
    /// Creates a note with a generated id, stamped with the current time.
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            priority: priority.into(),
            is_favorite: false,
            date_created: now_epoch_ms(),
        }
    }

    /// Creates a note with a caller-provided id and creation time.
    ///
    /// Used by tests and importers that need deterministic ordering.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        priority: Priority,
        date_created: i64,
    ) -> Result<Self, NoteValidationError> {
        if id.is_nil() {
            return Err(NoteValidationError::NilId);
        }

        Ok(Self {
            id,
            title: title.into(),
            priority: priority.into(),
            is_favorite: false,
            date_created,
        })
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// A clock set before 1970 yields `0` rather than failing note creation.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
