//! Implementation of the `subkeeper init` command.
//!
//! Seeds the config file from the embedded default template. The command is
//! **idempotent**: an existing config file is reported and left untouched.

use crate::config::write_default_config;
use crate::context::AppContext;
use crate::error::Result;
use crate::events::{append_event, Event, EventAction};
use serde_json::json;
use std::path::PathBuf;

/// Execute the `subkeeper init` command.
pub fn cmd_init(config_override: Option<PathBuf>) -> Result<()> {
    let ctx = AppContext::resolve(config_override)?;

    let written = write_default_config(&ctx.config_path)?;

    if !written {
        println!(
            "Config file already exists: {}",
            ctx.config_path.display()
        );
        return Ok(());
    }

    let event = Event::new(EventAction::Init).with_details(json!({
        "path": ctx.config_path.display().to_string(),
    }));
    append_event(&ctx, &event)?;

    println!("Created config file: {}", ctx.config_path.display());
    println!();
    println!("Every field is documented in the file with its default value.");
    println!("Add subscription URLs under `sub-urls:` and run `subkeeper check`.");

    Ok(())
}
