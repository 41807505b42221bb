//! Error types for the subkeeper CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for subkeeper operations.
///
/// Each variant maps to a specific exit code so that callers and scripts can
/// distinguish bad invocations from config problems and plain IO failures.
#[derive(Error, Debug)]
pub enum KeeperError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Configuration problem: unset/empty config path, unparseable document,
    /// or a value that fails schema validation.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Filesystem read or write failed.
    #[error("IO error: {0}")]
    IoError(String),
}

impl KeeperError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            KeeperError::UserError(_) => exit_codes::USER_ERROR,
            KeeperError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            KeeperError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for subkeeper operations.
pub type Result<T> = std::result::Result<T, KeeperError>;
