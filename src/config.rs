//! Configuration module
//!
//! Loads prseed settings from TOML files.

pub mod loader;
pub mod schema;

pub use schema::{Config, LabelConfig, RepositoryConfig};
