//! Core list-entry removal logic.

use crate::error::{KeeperError, Result};
use crate::fs::atomic_write_file;
use std::path::Path;

/// Section key of the subscription URL list in the config file.
pub const SUB_URLS_KEY: &str = "sub-urls";

/// Remove entries matching `target` from a top-level list section.
///
/// Scans the file line by line. The section begins at a line whose trimmed
/// content is exactly `"{section_key}:"` (or the inline empty-list form
/// `"{section_key}: []"`) and ends at the next top-level key. Within the
/// section, an indented line whose first non-space character is `-` is a
/// list entry; entries whose trimmed value equals `target` are dropped from
/// the output. Every other line, including comments and blank lines, is
/// copied through unchanged, so the file stays byte-identical apart from the
/// removed lines.
///
/// All matching entries are removed, not just the first. The rewritten
/// content replaces the file via an atomic temp-file + rename.
///
/// # Arguments
///
/// * `path` - The config file to edit
/// * `section_key` - Top-level key of the list section (e.g. `sub-urls`)
/// * `target` - Exact trimmed value of the entries to remove
///
/// # Returns
///
/// * `Ok(count)` - Number of entries removed (0 means the file content is
///   unchanged; the no-op overwrite still happens)
/// * `Err(KeeperError::ConfigError)` - The path is empty
/// * `Err(KeeperError::IoError)` - The file could not be read or rewritten
pub fn remove_list_entry<P: AsRef<Path>>(
    path: P,
    section_key: &str,
    target: &str,
) -> Result<usize> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(KeeperError::ConfigError(
            "config file path is empty".to_string(),
        ));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        KeeperError::IoError(format!(
            "failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let header = format!("{}:", section_key);
    let header_empty_list = format!("{}: []", section_key);

    // Splitting on '\n' keeps any '\r' inside the line and represents a
    // trailing newline as a final empty segment, so re-joining reproduces
    // untouched content exactly.
    let mut kept: Vec<&str> = Vec::new();
    let mut removed = 0;
    let mut inside_section = false;

    for line in content.split('\n') {
        let trimmed = line.trim();

        if !inside_section && (trimmed == header || trimmed == header_empty_list) {
            inside_section = true;
            kept.push(line);
            continue;
        }

        if inside_section {
            if line.as_bytes().first() == Some(&b' ') {
                if let Some(value) = entry_value(line)
                    && value == target
                {
                    removed += 1;
                    continue;
                }
            } else if !line.is_empty() && !line.starts_with('#') {
                // A new top-level key ends the section. The line itself is
                // kept as a normal line, not re-checked as a section header.
                inside_section = false;
            }
        }

        kept.push(line);
    }

    atomic_write_file(path, &kept.join("\n"))?;

    Ok(removed)
}

/// Remove a subscription URL from the `sub-urls` list of the config file.
pub fn remove_sub_url<P: AsRef<Path>>(path: P, url: &str) -> Result<usize> {
    remove_list_entry(path, SUB_URLS_KEY, url)
}

/// Extract the trimmed value of a list entry line.
///
/// Only the first non-space character is inspected: if it is the item
/// marker, the remainder of the line after it is the value. A dash further
/// into the line (e.g. inside a URL) is never reinterpreted as a marker, and
/// an indented comment is not an entry.
fn entry_value(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(' ');
    rest.strip_prefix('-').map(str::trim)
}

#[cfg(test)]
mod entry_value_tests {
    use super::entry_value;

    #[test]
    fn plain_entry() {
        assert_eq!(entry_value("  - http://a.example/sub"), Some("http://a.example/sub"));
    }

    #[test]
    fn no_space_after_marker() {
        assert_eq!(entry_value("  -http://a.example/sub"), Some("http://a.example/sub"));
    }

    #[test]
    fn indented_comment_is_not_an_entry() {
        assert_eq!(entry_value("  # - http://a.example/sub"), None);
    }

    #[test]
    fn indented_scalar_is_not_an_entry() {
        assert_eq!(entry_value("  nested-key: value"), None);
    }

    #[test]
    fn dash_inside_value_is_kept_whole() {
        assert_eq!(
            entry_value("  - http://a.example/sub-path"),
            Some("http://a.example/sub-path")
        );
    }
}
