//! `mkdir` plugin: recursive directory creation.

use log::info;

use crate::context::Environment;
use crate::error::PluginError;
use crate::plugins::{Plugin, PluginOutput, PluginResult};
use crate::storage::{OperationResult, create_directories};

/// Drive root plus the ordered elements to create below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MkdirRequest {
    pub drive: String,
    pub path_elems: Vec<String>,
}

impl MkdirRequest {
    /// Builds a request from a remote path relative to the working directory.
    pub fn from_remote_path(env: &Environment, path: &str) -> Self {
        let (drive, path_elems) = env.split_remote_path(path);
        Self { drive, path_elems }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MkdirPlugin;

impl Plugin for MkdirPlugin {
    type Request = MkdirRequest;

    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn run(&self, env: &Environment, request: &MkdirRequest) -> PluginResult {
        info!(
            "mkdir {} element(s) under drive '{}'",
            request.path_elems.len(),
            request.drive
        );
        match create_directories(&request.drive, &env.path_sep, &request.path_elems) {
            OperationResult::Success(_) => Ok(PluginOutput::Marker("OK")),
            OperationResult::Failure(e) => Err(PluginError::Storage(e)),
            // Directory creation never yields a conflict.
            OperationResult::Conflict(path) => Err(PluginError::InvalidRequest(format!(
                "unexpected conflict on {}",
                path
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR_STR as SEP;
    use tempfile::tempdir;

    #[test]
    fn test_mkdir_plugin_reports_ok_marker() {
        let dir = tempdir().expect("tempdir");
        let root = dir.path().to_string_lossy().into_owned();
        let env = Environment::new(SEP, root.clone());
        let request = MkdirRequest {
            drive: root,
            path_elems: vec!["one".into(), "two".into()],
        };

        let output = MkdirPlugin.run(&env, &request).expect("mkdir");

        assert_eq!(output, PluginOutput::Marker("OK"));
        assert!(dir.path().join("one").join("two").is_dir());
    }

    #[test]
    fn test_mkdir_plugin_surfaces_message() {
        let dir = tempdir().expect("tempdir");
        let root = dir.path().to_string_lossy().into_owned();
        std::fs::write(dir.path().join("blocker"), b"").expect("write");
        let env = Environment::new(SEP, root.clone());
        let request = MkdirRequest {
            drive: root.clone(),
            path_elems: vec!["blocker".into()],
        };

        let err = MkdirPlugin.run(&env, &request).expect_err("should fail");

        assert_eq!(
            err.to_string(),
            format!("cannot create directory '{root}{SEP}blocker': Not a directory")
        );
    }
}
