//! Async host adapter
//!
//! Plugins are synchronous and block on filesystem calls. The host runs each
//! invocation on tokio's blocking pool so independent calls can proceed in
//! parallel. No locking is added between calls touching the same path.

use log::{debug, error};

use crate::context::Environment;
use crate::error::PluginError;
use crate::plugins::{Plugin, PluginResult};

/// Runs `plugin` with `request` on the blocking thread pool.
pub async fn run_plugin<P>(plugin: P, env: Environment, request: P::Request) -> PluginResult
where
    P: Plugin + Send + 'static,
    P::Request: Send + 'static,
{
    let name = plugin.name();
    debug!("Dispatching plugin {}", name);

    match tokio::task::spawn_blocking(move || plugin.run(&env, &request)).await {
        Ok(result) => result,
        Err(e) => {
            error!("Plugin {} did not complete: {}", name, e);
            Err(PluginError::Host(format!("plugin {} did not complete: {}", name, e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::{MkdirPlugin, MkdirRequest, PluginOutput, UploadPlugin, UploadRequest};
    use std::path::MAIN_SEPARATOR_STR as SEP;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_independent_calls_run_concurrently() {
        let dir = tempdir().expect("tempdir");
        let root = dir.path().to_string_lossy().into_owned();
        let env = Environment::new(SEP, root.clone());

        let mkdir = run_plugin(
            MkdirPlugin,
            env.clone(),
            MkdirRequest {
                drive: root.clone(),
                path_elems: vec!["nested".into(), "dir".into()],
            },
        );
        let upload = run_plugin(
            UploadPlugin::new(1024),
            env,
            UploadRequest {
                target: root.clone(),
                name: "notes.txt".into(),
                data: b"notes".to_vec(),
                force: false,
            },
        );

        let (mkdir, upload) = tokio::join!(mkdir, upload);

        assert_eq!(mkdir.expect("mkdir"), PluginOutput::Marker("OK"));
        assert!(upload.is_ok());
        assert!(dir.path().join("nested").join("dir").is_dir());
        assert_eq!(
            std::fs::read(dir.path().join("notes.txt")).expect("read"),
            b"notes"
        );
    }
}
