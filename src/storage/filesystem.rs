//! File system probes
//!
//! Non-fatal checks used to classify failures. Every probe treats an error
//! from the filesystem as a negative answer.

use std::fs;
use std::path::Path;

/// Check if anything exists at `path` (symlinks are followed)
pub fn path_exists(path: &str) -> bool {
    fs::metadata(path).is_ok()
}

/// Check if `path` is a directory
pub fn directory_exists(path: &str) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Makes a relative path absolute against the process working directory.
///
/// Absolute paths are returned untouched. Symlinks and `..` are not resolved.
pub fn absolute_path(path: &str) -> String {
    if path.is_empty() || Path::new(path).is_absolute() {
        return path.to_string();
    }
    match std::path::absolute(path) {
        Ok(p) => p.to_string_lossy().into_owned(),
        Err(_) => path.to_string(),
    }
}

/// Returns the parent of `path`, splitting on the host separator.
///
/// Mirrors `dirname`: trailing separators are ignored, a path without any
/// separator yields `"."` and a top-level entry yields the separator itself.
pub fn parent_path(path: &str, separator: &str) -> String {
    if separator.is_empty() {
        return ".".to_string();
    }

    let mut trimmed = path;
    while trimmed.len() > separator.len() && trimmed.ends_with(separator) {
        trimmed = &trimmed[..trimmed.len() - separator.len()];
    }

    match trimmed.rsplit_once(separator) {
        Some(("", _)) => separator.to_string(),
        Some((head, _)) => head.to_string(),
        None => ".".to_string(),
    }
}
