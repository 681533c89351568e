//! Remote FS plugins - local driver
//!
//! Runs the `mkdir`, `upload` and `pwd` plugins against the local filesystem,
//! standing in for a remote plugin host.

use log::info;
use std::path::Path;
use std::process::ExitCode;

use remote_fs_plugins::command::{Command, parse_command};
use remote_fs_plugins::config::HostConfig;
use remote_fs_plugins::error::PluginError;
use remote_fs_plugins::error::handlers::{error_to_exit_code, handle_error};
use remote_fs_plugins::host::run_plugin;
use remote_fs_plugins::plugins::{
    MkdirPlugin, MkdirRequest, PluginResult, PwdPlugin, UploadPlugin, UploadRequest,
};

const USAGE: &str = "usage: remote-fs-plugins mkdir <path> | upload [-f] <local> [remote] | pwd";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            handle_error(&e);
            eprintln!("{}", e);
            ExitCode::from(error_to_exit_code(&e) as u8)
        }
    }
}

async fn run(args: &[String]) -> PluginResult {
    let config = HostConfig::load()?;
    let env = config.environment();
    info!(
        "Host environment: separator '{}', working directory {}",
        env.path_sep, env.pwd
    );

    match parse_command(args) {
        Command::Mkdir(path) => {
            let request = MkdirRequest::from_remote_path(&env, &path);
            run_plugin(MkdirPlugin, env, request).await
        }
        Command::Upload {
            local,
            remote,
            force,
        } => {
            let name = Path::new(&local)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| PluginError::InvalidRequest(format!("{}: not a file", local)))?;
            let data = std::fs::read(&local)?;
            let request = UploadRequest {
                target: remote.unwrap_or_else(|| env.pwd.clone()),
                name,
                data,
                force,
            };
            run_plugin(UploadPlugin::new(config.max_payload_bytes()), env, request).await
        }
        Command::Pwd => run_plugin(PwdPlugin, env, ()).await,
        Command::Unknown => Err(PluginError::InvalidRequest(USAGE.into())),
    }
}
