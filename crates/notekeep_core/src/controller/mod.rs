//! Headless presentation controller.
//!
//! # Responsibility
//! - Hold form state and the read-only note snapshot shown by a UI host.
//! - Translate user actions into note store calls.
//!
//! # Invariants
//! - The snapshot is only replaced by a successful `list()`.

pub mod notes_controller;
