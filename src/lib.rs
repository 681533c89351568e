pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod host;
pub mod plugins;
pub mod storage;

pub use context::Environment;
pub use plugins::{Plugin, PluginOutput};
pub use storage::{OperationResult, create_directories, upload_file};
