//! Implementation of the `subkeeper remove` command.
//!
//! Removes a subscription URL from the config file's list section while
//! leaving every other line byte-identical. This is the same edit the
//! checker applies on its own when `remove-failed-sub` is enabled.

use crate::cli::RemoveArgs;
use crate::context::require_existing_config;
use crate::edit::remove_list_entry;
use crate::error::Result;
use crate::events::{append_event, Event, EventAction};
use serde_json::json;
use std::path::PathBuf;

/// Execute the `subkeeper remove` command.
pub fn cmd_remove(config_override: Option<PathBuf>, args: RemoveArgs) -> Result<()> {
    let ctx = require_existing_config(config_override)?;

    let removed = remove_list_entry(&ctx.config_path, &args.key, &args.url)?;

    if removed == 0 {
        println!(
            "No entry matching '{}' under '{}:' in {}",
            args.url,
            args.key,
            ctx.config_path.display()
        );
        return Ok(());
    }

    // Best-effort audit logging: the file edit already happened, so a broken
    // events log must not turn the command into a failure.
    let event = Event::new(EventAction::Remove).with_details(json!({
        "key": args.key,
        "url": args.url,
        "removed": removed,
        "path": ctx.config_path.display().to_string(),
    }));
    if let Err(e) = append_event(&ctx, &event) {
        eprintln!("Warning: failed to log remove event: {}", e);
    }

    println!(
        "Removed {} {} matching '{}' from {}",
        removed,
        if removed == 1 { "entry" } else { "entries" },
        args.url,
        ctx.config_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn remove_args(url: &str) -> RemoveArgs {
        RemoveArgs {
            url: url.to_string(),
            key: "sub-urls".to_string(),
        }
    }

    #[test]
    fn remove_deletes_entry_and_logs_event() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "sub-urls:\n  - http://a.example/sub\n  - http://b.example/sub\ntimeout: 30\n",
        )
        .unwrap();

        cmd_remove(Some(path.clone()), remove_args("http://a.example/sub")).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "sub-urls:\n  - http://b.example/sub\ntimeout: 30\n"
        );

        let events = std::fs::read_to_string(temp_dir.path().join("events.ndjson")).unwrap();
        assert!(events.contains("\"remove\""));
        assert!(events.contains("http://a.example/sub"));
    }

    #[test]
    fn remove_without_match_is_a_silent_noop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        let input = "sub-urls:\n  - http://a.example/sub\n";
        std::fs::write(&path, input).unwrap();

        cmd_remove(Some(path.clone()), remove_args("http://zzz.example/sub")).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), input);
        // No mutation happened, so nothing was logged.
        assert!(!temp_dir.path().join("events.ndjson").exists());
    }

    #[test]
    fn remove_respects_key_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "platforms:\n  - openai\n  - youtube\n").unwrap();

        let args = RemoveArgs {
            url: "openai".to_string(),
            key: "platforms".to_string(),
        };
        cmd_remove(Some(path.clone()), args).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "platforms:\n  - youtube\n"
        );
    }

    #[test]
    fn remove_fails_on_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let result = cmd_remove(
            Some(temp_dir.path().join("missing.yaml")),
            remove_args("http://a.example/sub"),
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("subkeeper init"));
    }
}
