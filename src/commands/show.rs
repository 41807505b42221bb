//! Implementation of the `subkeeper show` command.

use crate::config::Config;
use crate::context::require_existing_config;
use crate::error::Result;
use std::path::PathBuf;

/// Execute the `subkeeper show` command.
///
/// Prints the fully resolved configuration (file values with defaults
/// applied for missing fields) as YAML on stdout.
pub fn cmd_show(config_override: Option<PathBuf>) -> Result<()> {
    let ctx = require_existing_config(config_override)?;
    let config = Config::load(&ctx.config_path)?;

    print!("{}", config.to_yaml()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_fails_on_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let result = cmd_show(Some(temp_dir.path().join("missing.yaml")));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("subkeeper init"));
    }

    #[test]
    fn show_fails_on_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "download-mb: 0\n").unwrap();

        let result = cmd_show(Some(path));
        assert!(result.is_err());
    }

    #[test]
    fn show_succeeds_on_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "concurrent: 7\n").unwrap();

        cmd_show(Some(path)).unwrap();
    }
}
