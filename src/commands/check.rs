//! Implementation of the `subkeeper check` command.

use crate::config::Config;
use crate::context::require_existing_config;
use crate::error::Result;
use std::path::PathBuf;

/// Execute the `subkeeper check` command.
///
/// Loads and validates the config file. On success prints a short summary;
/// on failure the first invalid value is reported with exit code 2.
pub fn cmd_check(config_override: Option<PathBuf>) -> Result<()> {
    let ctx = require_existing_config(config_override)?;
    let config = Config::load(&ctx.config_path)?;

    println!("OK: {}", ctx.config_path.display());
    println!("  sub-urls:        {}", config.sub_urls.len());
    println!("  sub-urls-remote: {}", config.sub_urls_remote.len());
    println!(
        "  save-method:     {}",
        if config.save_method.is_empty() {
            "(unset)"
        } else {
            config.save_method.as_str()
        }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeeperError;
    use crate::exit_codes;
    use tempfile::TempDir;

    #[test]
    fn check_accepts_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "sub-urls:\n  - https://example.com/sub\n").unwrap();

        cmd_check(Some(path)).unwrap();
    }

    #[test]
    fn check_rejects_invalid_value_with_config_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "success-rate: 2.0\n").unwrap();

        let result = cmd_check(Some(path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, KeeperError::ConfigError(_)));
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn check_rejects_unparseable_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "sub-urls: [unclosed\n").unwrap();

        let result = cmd_check(Some(path));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("failed to parse config YAML")
        );
    }
}
