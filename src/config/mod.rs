//! Configuration model for subkeeper.
//!
//! This module defines the Config struct that represents the checker's
//! `config.yaml`. It supports forward-compatible YAML parsing (unknown fields
//! are ignored), sensible defaults for optional fields, validation of config
//! values, and the embedded default template used to seed new config files.

mod model;
mod operations;
pub mod template;
pub mod types;


// Re-export public API
pub use model::Config;
pub use template::{write_default_config, DEFAULT_CONFIG_TEMPLATE};
