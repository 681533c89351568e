//! Error handling
//!
//! Defines error types and handling for the file-system plugins.

pub mod handlers;
pub mod types;

pub use types::*;
