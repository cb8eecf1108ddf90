// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match dirlist_core::bootstrap::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
