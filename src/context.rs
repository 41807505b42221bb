//! Active config file resolution for subkeeper.
//!
//! This module provides the "environment resolution" layer that decides
//! which config file a command operates on. The path is resolved once, at
//! startup, and carried as an explicit handle; nothing in the crate keeps
//! process-wide mutable path state.
//!
//! Resolution precedence: explicit `--config` argument, then the
//! `SUBKEEPER_CONFIG` environment variable, then the default
//! `config/config.yaml` relative to the working directory.

use crate::edit;
use crate::error::{KeeperError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Default config file path relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Environment variable overriding the default config file path.
pub const CONFIG_PATH_ENV: &str = "SUBKEEPER_CONFIG";

/// Resolved handle to the active config file.
///
/// All commands receive one of these instead of consulting globals, so tests
/// can point a context at any file without touching process state.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Path to the active config file.
    pub config_path: PathBuf,
}

impl AppContext {
    /// Resolve the context from an optional explicit path override.
    ///
    /// # Returns
    ///
    /// * `Ok(AppContext)` - Successfully resolved context
    /// * `Err(KeeperError::ConfigError)` - The resolved path is empty
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self> {
        let path = match override_path {
            Some(path) => path,
            None => match env::var(CONFIG_PATH_ENV) {
                Ok(value) => PathBuf::from(value),
                Err(_) => PathBuf::from(DEFAULT_CONFIG_PATH),
            },
        };

        Self::from_path(path)
    }

    /// Build a context for a specific config file path.
    ///
    /// This is useful for testing or when the path is already known.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(KeeperError::ConfigError(
                "config file path is empty".to_string(),
            ));
        }

        Ok(Self {
            config_path: path.to_path_buf(),
        })
    }

    /// Ensure the config file exists, returning an error if not.
    ///
    /// This should be called by all commands except `init` to provide a
    /// helpful error message guiding users to seed a config file.
    pub fn ensure_config_exists(&self) -> Result<()> {
        if !self.config_path.exists() {
            return Err(KeeperError::UserError(format!(
                "config file not found: {}\n\n\
                 Run `subkeeper init` to create one from the default template,\n\
                 or point --config (or {}) at an existing file.",
                self.config_path.display(),
                CONFIG_PATH_ENV
            )));
        }

        Ok(())
    }

    /// Get the path to the audit events log, next to the config file.
    pub fn events_file(&self) -> PathBuf {
        let parent = self.config_path.parent().unwrap_or(Path::new("."));
        parent.join("events.ndjson")
    }

    /// Remove a subscription URL from the active config file.
    ///
    /// Returns the number of removed entries. See [`edit::remove_sub_url`].
    pub fn remove_sub_url(&self, url: &str) -> Result<usize> {
        edit::remove_sub_url(&self.config_path, url)
    }
}

/// Convenience function to resolve context and ensure the config file exists.
///
/// Use this in most commands (except `init`) to get the context with proper
/// error handling for missing config files.
pub fn require_existing_config(override_path: Option<PathBuf>) -> Result<AppContext> {
    let ctx = AppContext::resolve(override_path)?;
    ctx.ensure_config_exists()?;
    Ok(ctx)
}
