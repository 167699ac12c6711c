//! Flutter-facing bindings for NoteKeep core.

pub mod api;
