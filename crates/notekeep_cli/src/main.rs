//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `notekeep_core` linkage and database bootstrap.
//! - Keep output deterministic for quick local sanity checks.

use notekeep_core::db::migrations::{current_user_version, latest_version};
use notekeep_core::db::open_db_in_memory;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("notekeep_core ping={}", notekeep_core::ping());
    println!("notekeep_core version={}", notekeep_core::core_version());

    let schema = open_db_in_memory()
        .map_err(|err| err.to_string())
        .and_then(|conn| current_user_version(&conn).map_err(|err| err.to_string()));
    match schema {
        Ok(version) => {
            println!("notekeep_core schema={version}/{}", latest_version());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("notekeep_core schema=error {err}");
            ExitCode::FAILURE
        }
    }
}
