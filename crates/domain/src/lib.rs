// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classifier;
pub mod config;
pub mod model;
pub mod options;
pub mod value_objects;
