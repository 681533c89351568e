//! `pwd` plugin: print the remote working directory.
//!
//! Passive: the working directory is already known to the host, so no
//! filesystem access happens.

use crate::context::Environment;
use crate::error::PluginError;
use crate::plugins::{Plugin, PluginOutput, PluginResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct PwdPlugin;

impl Plugin for PwdPlugin {
    type Request = ();

    fn name(&self) -> &'static str {
        "pwd"
    }

    fn run(&self, env: &Environment, _request: &()) -> PluginResult {
        if env.pwd.is_empty() {
            return Err(PluginError::InvalidRequest(
                "remote working directory is unknown".into(),
            ));
        }
        Ok(PluginOutput::Text(env.pwd.clone()))
    }
}
