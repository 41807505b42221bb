//! Embedded default config template.
//!
//! The template is the documented form of `Config::default()`: every field
//! appears with its default value and a comment. New config files are seeded
//! from this text rather than from a serialized `Config` so users start from
//! a file worth hand-editing.

use crate::error::Result;
use crate::fs::atomic_write_file;
use std::path::Path;

/// The default config file content, embedded at build time.
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("config.example.yaml");

/// Seed a config file from the default template.
///
/// Never overwrites: if the file already exists it is left untouched.
///
/// # Returns
///
/// * `Ok(true)` - The template was written
/// * `Ok(false)` - A config file already exists at `path`
/// * `Err(KeeperError::IoError)` - The write failed
pub fn write_default_config<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();

    if path.exists() {
        return Ok(false);
    }

    atomic_write_file(path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(true)
}
