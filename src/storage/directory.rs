//! Recursive directory creation
//!
//! Creates a nested chain of directories one prefix level at a time and
//! attributes any failure to the exact prefix that caused it.

use log::{debug, error, info, warn};
use std::fs;

use crate::error::MkdirError;
use crate::storage::filesystem::{absolute_path, directory_exists, path_exists};
use crate::storage::results::OperationResult;

/// Creates every prefix of `base + separator + segments[..]` in order.
///
/// Creation is attempted for every segment even after an earlier one
/// failed; a later success clears the pending error. Only the last
/// recorded failure is reported, so a `Failure` may still leave some
/// levels created on disk.
pub fn create_directories<S: AsRef<str>>(
    base: &str,
    separator: &str,
    segments: &[S],
) -> OperationResult {
    let mut accumulated = base.to_string();
    let mut pending: Option<MkdirError> = None;

    for segment in segments {
        accumulated.push_str(separator);
        accumulated.push_str(segment.as_ref());
        let path = absolute_path(&accumulated);

        match fs::create_dir(&path) {
            Ok(()) => {
                debug!("Created directory {}", path);
                pending = None;
            }
            Err(e) => {
                let failure = classify_failure(path);
                warn!(
                    "mkdir failed on {}: {} ({})",
                    failure.path(),
                    failure.reason(),
                    e
                );
                pending = Some(failure);
            }
        }
    }

    match pending {
        Some(err) => {
            error!("{}", err);
            OperationResult::Failure(err.into())
        }
        None => {
            let created = absolute_path(&accumulated);
            info!("Created directory tree {}", created);
            OperationResult::Success(created)
        }
    }
}

/// Re-probes a prefix whose creation failed.
fn classify_failure(path: String) -> MkdirError {
    if !path_exists(&path) {
        MkdirError::NoSuchPath(path)
    } else if !directory_exists(&path) {
        MkdirError::NotADirectory(path)
    } else {
        MkdirError::PermissionDenied(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, StorageError};
    use std::path::MAIN_SEPARATOR_STR as SEP;
    use tempfile::tempdir;

    #[test]
    fn test_creates_every_level() {
        let dir = tempdir().expect("tempdir");
        let base = dir.path().to_string_lossy().into_owned();

        let result = create_directories(&base, SEP, &["a", "b", "c"]);

        let expected = format!("{base}{SEP}a{SEP}b{SEP}c");
        assert_eq!(result, OperationResult::Success(expected));
        assert!(dir.path().join("a").join("b").join("c").is_dir());
    }

    #[test]
    fn test_existing_leaf_reports_permission_denied() {
        let dir = tempdir().expect("tempdir");
        let base = dir.path().to_string_lossy().into_owned();
        fs::create_dir(dir.path().join("present")).expect("create");

        let result = create_directories(&base, SEP, &["present"]);

        let err = result.error().expect("failure");
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(
            err.to_string(),
            format!("cannot create directory '{base}{SEP}present': Permission denied")
        );
    }

    #[test]
    fn test_later_success_clears_earlier_failure() {
        let dir = tempdir().expect("tempdir");
        let base = dir.path().to_string_lossy().into_owned();
        fs::create_dir(dir.path().join("present")).expect("create");

        let result = create_directories(&base, SEP, &["present", "fresh"]);

        assert!(result.is_success());
        assert!(dir.path().join("present").join("fresh").is_dir());
    }

    #[test]
    fn test_missing_base_reports_last_level() {
        let dir = tempdir().expect("tempdir");
        let base = dir
            .path()
            .join("does-not-exist")
            .to_string_lossy()
            .into_owned();

        let result = create_directories(&base, SEP, &["x", "y"]);

        match result {
            OperationResult::Failure(StorageError::Mkdir(MkdirError::NoSuchPath(p))) => {
                assert_eq!(p, format!("{base}{SEP}x{SEP}y"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_segments_is_success_on_base() {
        let dir = tempdir().expect("tempdir");
        let base = dir.path().to_string_lossy().into_owned();
        let none: [&str; 0] = [];

        assert_eq!(
            create_directories(&base, SEP, &none),
            OperationResult::Success(base)
        );
    }
}
