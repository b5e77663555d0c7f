//! Data file discovery
//!
//! Walks a directory tree and collects every file with a matching
//! extension. A missing or unreadable root yields an empty list rather
//! than an error, matching permissive directory-walk semantics.

use std::path::{Path, PathBuf};

/// Recursively discover files with `extension` (no leading dot) under `root`.
///
/// Returned paths are absolute and sorted for consistent ordering within
/// one invocation; callers must not depend on any ordering beyond that.
pub fn discover_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(root),
            Err(_) => root.to_path_buf(),
        }
    };

    let mut files = Vec::new();
    discover_files_recursive(&root, extension, &mut files);

    // Sort for consistent ordering
    files.sort();
    files
}

/// Recursively collect matching files in a directory
fn discover_files_recursive(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            if dir.exists() {
                log::warn!("Cannot read {}: {}", dir.display(), e);
            }
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.is_dir() {
            discover_files_recursive(&path, extension, files);
        } else if path.extension().is_some_and(|e| e == extension) {
            files.push(path);
        }
    }
}

#[cfg(test)]
#[path = "locate_test.rs"]
mod tests;
