// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod categories;
pub mod console;
pub mod filesystem;
pub mod hashing;
pub mod output;
pub mod persistence;
