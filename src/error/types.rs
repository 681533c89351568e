//! Error types
//!
//! Defines the failure taxonomy of the file-system plugins and the error
//! value handed back to the plugin host.

use std::fmt;
use std::io;

/// Closed set of failure reasons reported by storage operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoSuchPath,
    NotADirectory,
    PermissionDenied,
    NotAFile,
    WritePermissionDenied,
    WriteFailed,
}

/// Directory creation errors.
///
/// Each variant carries the prefix path whose creation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MkdirError {
    NoSuchPath(String),
    NotADirectory(String),
    PermissionDenied(String),
}

impl MkdirError {
    pub fn path(&self) -> &str {
        match self {
            MkdirError::NoSuchPath(p)
            | MkdirError::NotADirectory(p)
            | MkdirError::PermissionDenied(p) => p,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            MkdirError::NoSuchPath(_) => "No such file or directory",
            MkdirError::NotADirectory(_) => "Not a directory",
            MkdirError::PermissionDenied(_) => "Permission denied",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MkdirError::NoSuchPath(_) => ErrorKind::NoSuchPath,
            MkdirError::NotADirectory(_) => ErrorKind::NotADirectory,
            MkdirError::PermissionDenied(_) => ErrorKind::PermissionDenied,
        }
    }
}

impl fmt::Display for MkdirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot create directory '{}': {}",
            self.path(),
            self.reason()
        )
    }
}

impl std::error::Error for MkdirError {}

/// File upload errors.
///
/// Each variant carries the effective target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    NotAFile(String),
    WritePermissionDenied(String),
    NoSuchPath(String),
    WriteFailed(String),
}

impl UploadError {
    pub fn path(&self) -> &str {
        match self {
            UploadError::NotAFile(p)
            | UploadError::WritePermissionDenied(p)
            | UploadError::NoSuchPath(p)
            | UploadError::WriteFailed(p) => p,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            UploadError::NotAFile(_) => "Remote path is not a file",
            UploadError::WritePermissionDenied(_) => "Write permission denied",
            UploadError::NoSuchPath(_) => "No such remote file or directory",
            UploadError::WriteFailed(_) => "Could not write to file",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UploadError::NotAFile(_) => ErrorKind::NotAFile,
            UploadError::WritePermissionDenied(_) => ErrorKind::WritePermissionDenied,
            UploadError::NoSuchPath(_) => ErrorKind::NoSuchPath,
            UploadError::WriteFailed(_) => ErrorKind::WriteFailed,
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path(), self.reason())
    }
}

impl std::error::Error for UploadError {}

/// Storage module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Mkdir(MkdirError),
    Upload(UploadError),
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::Mkdir(e) => e.kind(),
            StorageError::Upload(e) => e.kind(),
        }
    }

    /// Path named by the failure message.
    pub fn path(&self) -> &str {
        match self {
            StorageError::Mkdir(e) => e.path(),
            StorageError::Upload(e) => e.path(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Mkdir(e) => write!(f, "{}", e),
            StorageError::Upload(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<MkdirError> for StorageError {
    fn from(error: MkdirError) -> Self {
        StorageError::Mkdir(error)
    }
}

impl From<UploadError> for StorageError {
    fn from(error: UploadError) -> Self {
        StorageError::Upload(error)
    }
}

/// Error value returned to the plugin host.
#[derive(Debug)]
pub enum PluginError {
    Storage(StorageError),
    InvalidRequest(String),
    PayloadTooLarge { size: u64, limit: u64 },
    Config(config::ConfigError),
    Io(io::Error),
    Host(String),
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Storage messages are surfaced verbatim to the remote caller.
            PluginError::Storage(e) => write!(f, "{}", e),
            PluginError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            PluginError::PayloadTooLarge { size, limit } => write!(
                f,
                "Payload too large: {} bytes exceeds limit of {} bytes",
                size, limit
            ),
            PluginError::Config(e) => write!(f, "Configuration error: {}", e),
            PluginError::Io(e) => write!(f, "I/O error: {}", e),
            PluginError::Host(msg) => write!(f, "Host error: {}", msg),
        }
    }
}

impl std::error::Error for PluginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PluginError::Storage(e) => Some(e),
            PluginError::Config(e) => Some(e),
            PluginError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for PluginError {
    fn from(error: StorageError) -> Self {
        PluginError::Storage(error)
    }
}

impl From<config::ConfigError> for PluginError {
    fn from(error: config::ConfigError) -> Self {
        PluginError::Config(error)
    }
}

impl From<io::Error> for PluginError {
    fn from(error: io::Error) -> Self {
        PluginError::Io(error)
    }
}
