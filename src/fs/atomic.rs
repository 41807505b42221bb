//! Atomic file write operations.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the target's directory
//! 2. Sync the file to disk (fsync)
//! 3. Atomically rename it over the original file
//!
//! On POSIX, `rename()` replaces the destination atomically when source and
//! destination are on the same filesystem. On Windows the destination is
//! removed first when a plain rename is refused. A crash can leave a stray
//! `.{filename}.tmp` in the target directory, never a torn target file.

use crate::error::{KeeperError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// The content lands in a temporary sibling file which is synced and then
/// renamed over `path`, so readers observe either the old content or the new
/// content, never a mixture.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The bytes to write
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(KeeperError::IoError)` - On write or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            KeeperError::IoError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_sibling_path(path)?;
    write_synced(&temp_path, content)?;
    replace_file(&temp_path, path)?;

    Ok(())
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Build the temporary file path `.{filename}.tmp` next to the target.
fn temp_sibling_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            KeeperError::IoError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and fsync it.
fn write_synced(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        KeeperError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let result = file
        .write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            KeeperError::IoError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        });

    if result.is_err() {
        let _ = fs::remove_file(path);
    }
    result
}

/// Rename the temporary file over the target.
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // On Windows rename() refuses to replace an existing destination.
    #[cfg(windows)]
    if target.exists() {
        let _ = fs::remove_file(target);
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        KeeperError::IoError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    // Sync the parent directory so the rename itself is durable.
    #[cfg(unix)]
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yaml");

        atomic_write(&file_path, b"timeout: 30\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "timeout: 30\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yaml");

        fs::write(&file_path, "original content").unwrap();
        atomic_write(&file_path, b"new content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn test_atomic_write_file_string() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yaml");

        atomic_write_file(&file_path, "sub-urls:\n  - http://a.example/sub\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "sub-urls:\n  - http://a.example/sub\n");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("config").join("config.yaml");

        atomic_write(&file_path, b"concurrent: 5\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "concurrent: 5\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yaml");

        atomic_write(&file_path, b"content").unwrap();

        let temp_path = temp_dir.path().join(".config.yaml.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_temp_sibling_path() {
        let target = Path::new("/some/path/config.yaml");
        let temp = temp_sibling_path(target).unwrap();

        assert_eq!(temp.parent().unwrap(), Path::new("/some/path"));
        assert_eq!(temp.file_name().unwrap(), ".config.yaml.tmp");
    }

    #[test]
    fn test_atomic_write_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.yaml");

        atomic_write(&file_path, b"").unwrap();

        let content = fs::read(&file_path).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_atomic_write_preserves_exact_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yaml");

        let content = "# header comment\nsub-urls:\n  - http://a.example/sub\r\n\ntimeout: 30";
        atomic_write_file(&file_path, content).unwrap();

        let read_back = fs::read_to_string(&file_path).unwrap();
        assert_eq!(read_back, content);
    }
}
