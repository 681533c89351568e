//! Configuration management for the remote file-system plugins
//!
//! Host settings come from built-in defaults, an optional `config.toml` and
//! `REMOTE_FS_*` environment variables, in increasing order of precedence.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::context;

/// Host configuration consumed by the plugins
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Remote path separator, `/` or `\`
    /// Environment: REMOTE_FS_PATH_SEPARATOR
    pub path_separator: String,

    /// Remote working directory used to resolve relative paths
    /// Environment: REMOTE_FS_WORKING_DIRECTORY
    pub working_directory: String,

    /// Maximum upload payload size in MB
    /// Environment: REMOTE_FS_MAX_PAYLOAD_MB
    pub max_payload_mb: u64,
}

impl HostConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_paths = [
            "remote-fs/config", // Packaged layout: ./remote-fs/config.toml
            "config",           // Local development: ./config.toml
        ];

        let mut builder = Config::builder()
            .set_default("path_separator", std::path::MAIN_SEPARATOR_STR)?
            .set_default("working_directory", default_working_directory())?
            .set_default("max_payload_mb", 100_i64)?;

        for config_path in &config_paths {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("REMOTE_FS"))
            .build()?;

        let config: HostConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.path_separator.is_empty() {
            return Err(config::ConfigError::Message(
                "path_separator cannot be empty".into(),
            ));
        }

        if self.max_payload_mb == 0 {
            return Err(config::ConfigError::Message(
                "max_payload_mb must be greater than 0".into(),
            ));
        }

        if self.max_payload_mb.checked_mul(1024 * 1024).is_none() {
            return Err(config::ConfigError::Message(format!(
                "max_payload_mb too large: {}",
                self.max_payload_mb
            )));
        }

        Ok(())
    }

    /// Get maximum payload size in bytes
    pub fn max_payload_bytes(&self) -> u64 {
        self.max_payload_mb * 1024 * 1024
    }

    /// Build the per-call plugin environment
    pub fn environment(&self) -> context::Environment {
        context::Environment::new(self.path_separator.clone(), self.working_directory.clone())
    }
}

fn default_working_directory() -> String {
    std::env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}
