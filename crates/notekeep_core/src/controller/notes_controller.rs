//! Single-screen notes controller.
//!
//! # Responsibility
//! - Own the title/priority form and the displayed note rows.
//! - Refresh rows from the store after every successful mutation.
//! - Surface persistence failures as a dismissible notice.
//!
//! # Invariants
//! - A failed persistence call leaves `rows()` exactly as it was.
//! - `NotFound` is silent for the user; the stale row is dropped on refresh.

use crate::model::note::{Note, NoteId};
use crate::model::priority::{Priority, PriorityColor};
use crate::repo::note_repo::NoteRepository;
use crate::service::note_store::{NoteStore, NoteStoreError};
use log::debug;

/// Display projection of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: NoteId,
    pub title: String,
    pub priority_label: String,
    pub priority_color: PriorityColor,
    pub is_favorite: bool,
}

impl From<&Note> for NoteRow {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            priority_label: note.priority.label().to_string(),
            priority_color: note.priority.color(),
            is_favorite: note.is_favorite,
        }
    }
}

/// Non-fatal message shown after a failed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Action that failed (`save`, `toggle_favorite`, `delete`).
    pub action: &'static str,
    pub message: String,
}

/// Controller for the notes screen.
pub struct NotesController<R: NoteRepository> {
    store: NoteStore<R>,
    title: String,
    selected_priority: Priority,
    rows: Vec<NoteRow>,
    notice: Option<Notice>,
}

impl<R: NoteRepository> NotesController<R> {
    /// Creates a controller and loads the initial snapshot.
    pub fn new(store: NoteStore<R>) -> Result<Self, NoteStoreError> {
        let mut controller = Self {
            store,
            title: String::new(),
            selected_priority: Priority::default(),
            rows: Vec::new(),
            notice: None,
        };
        controller.refresh()?;
        Ok(controller)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn selected_priority(&self) -> Priority {
        self.selected_priority
    }

    pub fn select_priority(&mut self, priority: Priority) {
        self.selected_priority = priority;
    }

    /// Current snapshot, newest first.
    pub fn rows(&self) -> &[NoteRow] {
        &self.rows
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Re-queries the store and replaces the snapshot.
    pub fn refresh(&mut self) -> Result<(), NoteStoreError> {
        let notes = self.store.list()?;
        self.rows = notes.iter().map(NoteRow::from).collect();
        Ok(())
    }

    /// Saves the form as a new note. The form keeps its values.
    pub fn save(&mut self) -> Result<(), NoteStoreError> {
        let outcome = self
            .store
            .create(self.title.clone(), self.selected_priority)
            .map(|_| ());
        self.settle("save", outcome)
    }

    pub fn toggle_favorite(&mut self, id: NoteId) -> Result<(), NoteStoreError> {
        let outcome = self.store.toggle_favorite(id).map(|_| ());
        self.settle("toggle_favorite", outcome)
    }

    pub fn delete(&mut self, id: NoteId) -> Result<(), NoteStoreError> {
        let outcome = self.store.delete(id);
        self.settle("delete", outcome)
    }

    /// Deletes the rows at `offsets` in the current snapshot.
    ///
    /// Offsets are resolved before any deletion; out-of-range offsets are
    /// ignored.
    pub fn delete_at(&mut self, offsets: &[usize]) -> Result<(), NoteStoreError> {
        let ids: Vec<NoteId> = offsets
            .iter()
            .filter_map(|&index| self.rows.get(index).map(|row| row.id))
            .collect();

        for id in ids {
            self.delete(id)?;
        }
        Ok(())
    }

    fn settle(
        &mut self,
        action: &'static str,
        outcome: Result<(), NoteStoreError>,
    ) -> Result<(), NoteStoreError> {
        match outcome {
            Ok(()) => {
                self.notice = None;
                self.refresh()
            }
            Err(NoteStoreError::NotFound(id)) => {
                debug!("event=controller_action module=controller status=skipped action={action} note_id={id}");
                self.refresh()
            }
            Err(err) => {
                self.notice = Some(Notice {
                    action,
                    message: err.to_string(),
                });
                Ok(())
            }
        }
    }
}
