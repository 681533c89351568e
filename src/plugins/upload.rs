//! `upload` plugin: single-file upload with overwrite protection.

use log::info;

use crate::context::Environment;
use crate::error::PluginError;
use crate::plugins::{Plugin, PluginOutput, PluginResult, TransferStatus};
use crate::storage::filesystem::directory_exists;
use crate::storage::{OperationResult, upload_file};

/// Upload arguments. `data` is the already-decoded file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub target: String,
    pub name: String,
    pub data: Vec<u8>,
    pub force: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct UploadPlugin {
    max_payload_bytes: u64,
}

impl UploadPlugin {
    pub fn new(max_payload_bytes: u64) -> Self {
        Self { max_payload_bytes }
    }
}

impl Plugin for UploadPlugin {
    type Request = UploadRequest;

    fn name(&self) -> &'static str {
        "upload"
    }

    fn run(&self, env: &Environment, request: &UploadRequest) -> PluginResult {
        let size = request.data.len() as u64;
        if size > self.max_payload_bytes {
            return Err(PluginError::PayloadTooLarge {
                size,
                limit: self.max_payload_bytes,
            });
        }

        let target = env.absolute(&request.target);
        // The name is only appended when the target is a directory.
        if request.name.is_empty() && directory_exists(&target) {
            return Err(PluginError::InvalidRequest(format!(
                "{}: empty file name for directory target",
                target
            )));
        }
        info!(
            "upload {} ({} bytes, force={}) to {}",
            request.name, size, request.force, target
        );

        match upload_file(
            &target,
            &env.path_sep,
            &request.name,
            &request.data,
            request.force,
        ) {
            OperationResult::Success(path) => Ok(PluginOutput::Pair(TransferStatus::Ok, path)),
            OperationResult::Conflict(path) => Ok(PluginOutput::Pair(TransferStatus::Ko, path)),
            OperationResult::Failure(e) => Err(PluginError::Storage(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR_STR as SEP;
    use tempfile::tempdir;

    fn request(target: &str, data: &[u8], force: bool) -> UploadRequest {
        UploadRequest {
            target: target.to_string(),
            name: "payload.bin".into(),
            data: data.to_vec(),
            force,
        }
    }

    #[test]
    fn test_relative_target_resolves_against_pwd() {
        let dir = tempdir().expect("tempdir");
        let pwd = dir.path().to_string_lossy().into_owned();
        std::fs::create_dir(dir.path().join("drop")).expect("mkdir");
        let env = Environment::new(SEP, pwd.clone());

        let output = UploadPlugin::new(1024)
            .run(&env, &request("drop", b"abc", false))
            .expect("upload");

        assert_eq!(
            output,
            PluginOutput::Pair(TransferStatus::Ok, format!("{pwd}{SEP}drop{SEP}payload.bin"))
        );
    }

    #[test]
    fn test_conflict_is_reported_as_ko_pair() {
        let dir = tempdir().expect("tempdir");
        let pwd = dir.path().to_string_lossy().into_owned();
        std::fs::write(dir.path().join("payload.bin"), b"old").expect("write");
        let env = Environment::new(SEP, pwd.clone());

        let output = UploadPlugin::new(1024)
            .run(&env, &request(&pwd, b"new", false))
            .expect("upload");

        assert_eq!(output.to_string(), format!("KO {pwd}{SEP}payload.bin"));
    }

    #[test]
    fn test_payload_limit_is_enforced_before_writing() {
        let dir = tempdir().expect("tempdir");
        let pwd = dir.path().to_string_lossy().into_owned();
        let env = Environment::new(SEP, pwd.clone());

        let err = UploadPlugin::new(2)
            .run(&env, &request(&pwd, b"too big", false))
            .expect_err("limit");

        assert!(matches!(err, PluginError::PayloadTooLarge { size: 7, limit: 2 }));
        assert!(!dir.path().join("payload.bin").exists());
    }

    #[test]
    fn test_empty_name_is_rejected_for_directory_target() {
        let dir = tempdir().expect("tempdir");
        let pwd = dir.path().to_string_lossy().into_owned();
        let env = Environment::new(SEP, pwd.clone());
        let mut req = request(&pwd, b"", false);
        req.name.clear();

        let err = UploadPlugin::new(1024).run(&env, &req).expect_err("name");
        assert!(matches!(err, PluginError::InvalidRequest(_)));
    }

    #[test]
    fn test_empty_name_with_explicit_file_target() {
        let dir = tempdir().expect("tempdir");
        let pwd = dir.path().to_string_lossy().into_owned();
        let target = format!("{pwd}{SEP}explicit.txt");
        let env = Environment::new(SEP, pwd);
        let mut req = request(&target, b"content", false);
        req.name.clear();

        let output = UploadPlugin::new(1024).run(&env, &req).expect("upload");

        assert_eq!(output, PluginOutput::Pair(TransferStatus::Ok, target));
        assert_eq!(
            std::fs::read(dir.path().join("explicit.txt")).expect("read"),
            b"content"
        );
    }
}
