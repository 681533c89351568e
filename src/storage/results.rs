//! Storage result types
//!
//! Defines the outcome returned by storage operations.

use crate::error::StorageError;

/// Outcome of a directory creation or upload.
///
/// Expected conditions such as a missing parent or an existing target are
/// values of this type, never panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Completed; carries the absolute path that was created or written.
    Success(String),
    /// Target already exists as a regular file and overwrite was not forced.
    /// Nothing was modified.
    Conflict(String),
    Failure(StorageError),
}

impl OperationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    /// Resolved path for `Success` and `Conflict` outcomes
    pub fn final_path(&self) -> Option<&str> {
        match self {
            OperationResult::Success(p) | OperationResult::Conflict(p) => Some(p),
            OperationResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&StorageError> {
        match self {
            OperationResult::Failure(e) => Some(e),
            _ => None,
        }
    }
}
