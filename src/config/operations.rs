//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::SAVE_METHODS;
use crate::error::{KeeperError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config.yaml file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(KeeperError::IoError)` - The file could not be read
    /// * `Err(KeeperError::ConfigError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            KeeperError::IoError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| KeeperError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            KeeperError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `filter-regex`, when set, must compile
    /// - `callback-script`, when set, must be parseable as shell words
    /// - `success-rate` must lie in 0.0..=1.0
    /// - `download-mb` must be greater than 0
    /// - `save-method`, when set, must be a known method
    pub fn validate(&self) -> Result<()> {
        if !self.filter_regex.is_empty() {
            regex::Regex::new(&self.filter_regex).map_err(|e| {
                KeeperError::ConfigError(format!(
                    "config validation failed: filter-regex does not compile: {}",
                    e
                ))
            })?;
        }

        if !self.callback_script.is_empty() {
            shell_words::split(&self.callback_script).map_err(|e| {
                KeeperError::ConfigError(format!(
                    "config validation failed: callback-script is not parseable: {}",
                    e
                ))
            })?;
        }

        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(KeeperError::ConfigError(format!(
                "config validation failed: success-rate must lie in 0.0..=1.0 (found {})",
                self.success_rate
            )));
        }

        if self.download_mb == 0 {
            return Err(KeeperError::ConfigError(
                "config validation failed: download-mb must be greater than 0".to_string(),
            ));
        }

        if !self.save_method.is_empty() && !SAVE_METHODS.contains(&self.save_method.as_str()) {
            return Err(KeeperError::ConfigError(format!(
                "config validation failed: unknown save-method '{}' (expected one of: {})",
                self.save_method,
                SAVE_METHODS.join(", ")
            )));
        }

        Ok(())
    }

    /// All subscription URLs: the local `sub-urls` list followed by
    /// `sub-urls-remote`, in document order.
    pub fn all_sub_urls(&self) -> Vec<String> {
        self.sub_urls
            .iter()
            .chain(self.sub_urls_remote.iter())
            .cloned()
            .collect()
    }
}
