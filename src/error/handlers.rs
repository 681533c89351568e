//! Error handlers
//!
//! Logging and exit-status mapping for plugin errors.

use crate::error::types::{ErrorKind, PluginError};
use log::error;

/// Log a plugin error
pub fn handle_error(err: &PluginError) {
    match err {
        PluginError::Storage(e) => {
            error!("Storage failure ({:?}) on {}: {}", e.kind(), e.path(), e)
        }
        other => error!("Plugin error: {}", other),
    }
}

/// Convert an error to the exit status used by the local driver
pub fn error_to_exit_code(err: &PluginError) -> i32 {
    match err {
        PluginError::Storage(e) => match e.kind() {
            ErrorKind::NoSuchPath => 2,
            ErrorKind::NotADirectory | ErrorKind::NotAFile => 3,
            ErrorKind::PermissionDenied | ErrorKind::WritePermissionDenied => 4,
            ErrorKind::WriteFailed => 5,
        },
        PluginError::InvalidRequest(_) | PluginError::PayloadTooLarge { .. } => 64,
        PluginError::Config(_) => 78,
        PluginError::Io(_) => 74,
        PluginError::Host(_) => 70,
    }
}
