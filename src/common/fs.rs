//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, directory_copy_failed, file_write_failed};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

/// Create a directory and all of its parents
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| file_write_failed(path.display().to_string(), e.to_string()))
}

/// Write a text file, creating parent directories first
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, content)
        .map_err(|e| file_write_failed(path.display().to_string(), e.to_string()))
}

/// Copy a directory recursively, returning the number of files copied
///
/// Symlinks are followed, so the target receives regular files.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize> {
    let copy_error = |reason: String| {
        directory_copy_failed(src.display().to_string(), dst.display().to_string(), reason)
    };

    if !src.is_dir() {
        return Err(copy_error("source is not a directory".to_string()));
    }
    ensure_dir(dst)?;

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true).min_depth(1) {
        let entry = entry.map_err(|e| copy_error(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| copy_error(e.to_string()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| copy_error(e.to_string()))?;
        } else {
            ensure_parent_dir(&target)?;
            fs::copy(entry.path(), &target).map_err(|e| copy_error(e.to_string()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
