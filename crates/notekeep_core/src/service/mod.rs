//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the note store operations.
//! - Keep controller/FFI layers decoupled from storage details.

pub mod note_store;
