//! Command implementations for subkeeper.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command resolves the active config file through
//! `context::AppContext` and never consults global state.

mod check;
mod init;
mod remove;
mod show;

use crate::cli::{Cli, Command};
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function with the resolved `--config` override.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_override = cli.config;

    match cli.command {
        Command::Init => init::cmd_init(config_override),
        Command::Show => show::cmd_show(config_override),
        Command::Check => check::cmd_check(config_override),
        Command::Remove(args) => remove::cmd_remove(config_override, args),
    }
}
