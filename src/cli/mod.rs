//! CLI argument parsing for subkeeper.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Subkeeper: config manager for proxy subscription checkers.
///
/// The config file is plain hand-edited YAML. Subkeeper seeds it from a
/// documented template, validates it, and edits the `sub-urls` list in place
/// while preserving every comment and every unrelated line byte-for-byte.
#[derive(Parser, Debug)]
#[command(name = "subkeeper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (overrides SUBKEEPER_CONFIG and the default
    /// config/config.yaml).
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for subkeeper.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the config file from the default template.
    ///
    /// Creates the file with documented defaults for every field.
    /// Idempotent: an existing config file is never overwritten.
    Init,

    /// Print the resolved configuration.
    ///
    /// Loads the config file, applies defaults for missing fields, and
    /// prints the result as YAML.
    Show,

    /// Validate the config file.
    ///
    /// Loads and validates the config, reporting the first invalid value.
    Check,

    /// Remove a subscription URL from the config file.
    ///
    /// Edits the `sub-urls` list in place; comments, blank lines, and all
    /// other fields are preserved exactly. Every entry matching the URL is
    /// removed.
    Remove(RemoveArgs),
}

/// Arguments for the `remove` command.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Subscription URL to remove (must match the entry exactly).
    pub url: String,

    /// Top-level list section to remove from.
    #[arg(long, default_value = "sub-urls")]
    pub key: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
