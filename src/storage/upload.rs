//! File upload
//!
//! Writes an already-decoded payload to a remote path, refusing to clobber
//! an existing file unless forced. An overwritten file keeps its previous
//! modification and access times.

use filetime::FileTime;
use log::{debug, error, info, warn};
use std::fs::{self, File, Metadata};
use std::io::Write;

use crate::error::UploadError;
use crate::storage::filesystem::{absolute_path, directory_exists, parent_path};
use crate::storage::results::OperationResult;

/// Timestamps of a file captured before it is overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorTimes {
    pub modified: FileTime,
    pub accessed: FileTime,
}

impl PriorTimes {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            modified: FileTime::from_last_modification_time(metadata),
            accessed: FileTime::from_last_access_time(metadata),
        }
    }
}

/// Resolves the effective target path.
///
/// When `target` is an existing directory, `file_name` is appended to it,
/// adding `separator` only when `target` does not already end with it.
pub fn resolve_target(target: &str, separator: &str, file_name: &str) -> String {
    let mut resolved = target.to_string();
    if directory_exists(&resolved) {
        if !resolved.ends_with(separator) {
            resolved.push_str(separator);
        }
        resolved.push_str(file_name);
    }
    absolute_path(&resolved)
}

/// Uploads `payload` to `target`.
///
/// Returns `Conflict` without touching anything when the target is an
/// existing regular file and `force` is false.
pub fn upload_file(
    target: &str,
    separator: &str,
    file_name: &str,
    payload: &[u8],
    force: bool,
) -> OperationResult {
    let path = resolve_target(target, separator, file_name);

    let prior = match fs::metadata(&path) {
        Ok(metadata) => {
            if !metadata.is_file() {
                let err = UploadError::NotAFile(path);
                error!("{}", err);
                return OperationResult::Failure(err.into());
            }
            if !force {
                info!("Refusing to overwrite {} without force", path);
                return OperationResult::Conflict(path);
            }
            Some(PriorTimes::from_metadata(&metadata))
        }
        Err(_) => None,
    };

    if let Err(err) = write_payload(&path, separator, payload) {
        error!("{}", err);
        return OperationResult::Failure(err.into());
    }

    if let Some(prior) = prior {
        // Restore failures are logged and do not change the outcome.
        let _ = restore_timestamps(&path, &prior);
    }

    info!("Uploaded {} bytes to {}", payload.len(), path);
    OperationResult::Success(path)
}

/// Creates or truncates `path` and writes the whole payload.
///
/// The file handle is closed before this returns on every path.
fn write_payload(path: &str, separator: &str, payload: &[u8]) -> Result<(), UploadError> {
    let mut file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("Failed to open {} for writing: {}", path, e);
            let parent = parent_path(path, separator);
            return Err(if directory_exists(&parent) {
                UploadError::WritePermissionDenied(path.to_string())
            } else {
                UploadError::NoSuchPath(path.to_string())
            });
        }
    };

    if let Err(e) = file.write_all(payload).and_then(|_| file.flush()) {
        debug!("Write to {} failed: {}", path, e);
        return Err(UploadError::WriteFailed(path.to_string()));
    }

    drop(file);
    Ok(())
}

/// Reapplies captured timestamps to `path`.
///
/// Returns whether the timestamps were applied. Failures are only logged.
pub fn restore_timestamps(path: &str, prior: &PriorTimes) -> bool {
    match filetime::set_file_times(path, prior.accessed, prior.modified) {
        Ok(()) => {
            debug!("Restored timestamps on {}", path);
            true
        }
        Err(e) => {
            warn!("Could not restore timestamps on {}: {}", path, e);
            false
        }
    }
}
