//! Plugin boundary
//!
//! Adapts storage operations to the values the plugin host expects: an
//! `OK` marker, an `(OK|KO, path)` pair, plain text, or a `PluginError`.

pub mod mkdir;
pub mod pwd;
pub mod upload;

use std::fmt;

use crate::context::Environment;
use crate::error::PluginError;

pub use mkdir::{MkdirPlugin, MkdirRequest};
pub use pwd::PwdPlugin;
pub use upload::{UploadPlugin, UploadRequest};

/// Status half of an `(status, path)` reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    Ok,
    Ko,
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferStatus::Ok => write!(f, "OK"),
            TransferStatus::Ko => write!(f, "KO"),
        }
    }
}

/// Successful reply handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginOutput {
    Marker(&'static str),
    Pair(TransferStatus, String),
    Text(String),
}

impl fmt::Display for PluginOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginOutput::Marker(m) => write!(f, "{}", m),
            PluginOutput::Pair(status, path) => write!(f, "{} {}", status, path),
            PluginOutput::Text(text) => write!(f, "{}", text),
        }
    }
}

pub type PluginResult = Result<PluginOutput, PluginError>;

/// A remote file-system plugin.
///
/// Plugins are stateless; `run` may be called concurrently from several
/// host threads without coordination.
pub trait Plugin {
    type Request;

    fn name(&self) -> &'static str;

    fn run(&self, env: &Environment, request: &Self::Request) -> PluginResult;
}
