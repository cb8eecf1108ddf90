//! Core wiring for the `dirlist` CLI.
//!
//! This crate hosts the presentation layer (argument parsing) and the
//! bootstrap glue that assembles the infrastructure adapters around the
//! use-case orchestrator. The binary crate is a thin shell over
//! [`bootstrap::run`].

#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod presentation;

/// Crate version shown by `--version` and the startup banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
