//! FFI use-case API for a Flutter UI host.
//!
//! # Responsibility
//! - Expose the four note store operations plus priority display helpers.
//! - Convert every core error into a response envelope.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Each call opens the configured database, so no connection outlives a call.

use log::warn;
use notekeep_core::db::open_db;
use notekeep_core::{
    classify_priority, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, Note, NoteId, NoteKeepConfig, NoteStore, NoteStoreError, Priority,
    SqliteNoteRepository,
};
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

static NOTES_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One note row ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Stable note ID in string form.
    pub id: String,
    pub title: String,
    /// Persisted priority code (`low|medium|high`, or raw legacy text).
    pub priority: String,
    /// Capitalized label for display.
    pub priority_label: String,
    /// Color name (`green|orange|red|black`).
    pub priority_color: String,
    pub is_favorite: bool,
    /// Creation time in epoch milliseconds.
    pub date_created: i64,
}

/// Response envelope for the notes list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    /// Notes sorted newest first (empty on failure).
    pub items: Vec<NoteItem>,
    /// Human-readable message for diagnostics.
    pub message: String,
}

/// Response envelope for note mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Stable error code (`not_found|persistence|invalid_argument`) on failure.
    pub error_code: Option<String>,
    /// Note as committed, when the operation yields one.
    pub note: Option<NoteItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note: Option<NoteItem>) -> Self {
        Self {
            ok: true,
            error_code: None,
            note,
            message: message.into(),
        }
    }

    fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error_code: Some(code.to_string()),
            note: None,
            message: message.into(),
        }
    }
}

/// Creates a note from the form fields.
///
/// `priority` accepts `low|medium|high` case-insensitively.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_create(title: String, priority: String) -> NoteActionResponse {
    let Some(parsed) = Priority::parse(&priority) else {
        return NoteActionResponse::failure(
            "invalid_argument",
            format!("notes_create failed: unsupported priority `{priority}`"),
        );
    };

    match with_note_store(|store| store.create(title, parsed)) {
        Ok(note) => NoteActionResponse::success("Note saved.", Some(to_note_item(&note))),
        Err(err) => action_failure("notes_create", err),
    }
}

/// Lists every note, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NotesListResponse {
    match with_note_store(|store| store.list()) {
        Ok(notes) => {
            let items = notes.iter().map(to_note_item).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No notes.".to_string()
            } else {
                format!("{} note(s).", items.len())
            };
            NotesListResponse { items, message }
        }
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error call=notes_list error={err}");
            NotesListResponse {
                items: Vec::new(),
                message: format!("notes_list failed: {err}"),
            }
        }
    }
}

/// Flips the favorite flag of one note.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_toggle_favorite(id: String) -> NoteActionResponse {
    let note_id = match parse_note_id("notes_toggle_favorite", &id) {
        Ok(note_id) => note_id,
        Err(response) => return response,
    };

    match with_note_store(|store| store.toggle_favorite(note_id)) {
        Ok(note) => NoteActionResponse::success("Favorite updated.", Some(to_note_item(&note))),
        Err(err) => action_failure("notes_toggle_favorite", err),
    }
}

/// Permanently deletes one note.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(id: String) -> NoteActionResponse {
    let note_id = match parse_note_id("notes_delete", &id) {
        Ok(note_id) => note_id,
        Err(response) => return response,
    };

    match with_note_store(|store| store.delete(note_id)) {
        Ok(()) => NoteActionResponse::success("Note deleted.", None),
        Err(err) => action_failure("notes_delete", err),
    }
}

/// Maps a raw priority value to its color name; unknown values get `black`.
#[flutter_rust_bridge::frb(sync)]
pub fn priority_color(priority: String) -> String {
    classify_priority(&priority).as_str().to_owned()
}

/// Picker labels in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn priority_labels() -> Vec<String> {
    Priority::ALL
        .iter()
        .map(|priority| priority.label().to_owned())
        .collect()
}

fn resolve_notes_db_path() -> PathBuf {
    NOTES_DB_PATH
        .get_or_init(|| NoteKeepConfig::from_env().db_path)
        .clone()
}

#[derive(Debug)]
enum CallError {
    Open(String),
    Store(NoteStoreError),
}

impl std::fmt::Display for CallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(message) => f.write_str(message),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

fn with_note_store<T>(
    f: impl FnOnce(&mut NoteStore<SqliteNoteRepository<'_>>) -> Result<T, NoteStoreError>,
) -> Result<T, CallError> {
    let db_path = resolve_notes_db_path();
    let mut conn = open_db(&db_path)
        .map_err(|err| CallError::Open(format!("notes DB open failed: {err}")))?;
    let repo = SqliteNoteRepository::try_new(&mut conn)
        .map_err(|err| CallError::Open(format!("notes repo init failed: {err}")))?;
    let mut store = NoteStore::new(repo);
    f(&mut store).map_err(CallError::Store)
}

fn parse_note_id(call: &str, raw: &str) -> Result<NoteId, NoteActionResponse> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        NoteActionResponse::failure(
            "invalid_argument",
            format!("{call} failed: invalid note id `{raw}`"),
        )
    })
}

fn action_failure(call: &str, err: CallError) -> NoteActionResponse {
    let code = match &err {
        CallError::Open(_) => "persistence",
        CallError::Store(store_err) => store_err.code(),
    };
    warn!("event=ffi_call module=ffi status=error call={call} error_code={code} error={err}");
    NoteActionResponse::failure(code, format!("{call} failed: {err}"))
}

fn to_note_item(note: &Note) -> NoteItem {
    NoteItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        priority: note.priority.as_str().to_owned(),
        priority_label: note.priority.label().to_owned(),
        priority_color: note.priority.color().as_str().to_owned(),
        is_favorite: note.is_favorite,
        date_created: note.date_created,
    }
}
