//! File system storage operations
//!
//! Directory creation and file upload against the server-local filesystem.

pub mod directory;
pub mod filesystem;
pub mod results;
pub mod upload;

pub use directory::create_directories;
pub use results::OperationResult;
pub use upload::{PriorTimes, resolve_target, restore_timestamps, upload_file};
