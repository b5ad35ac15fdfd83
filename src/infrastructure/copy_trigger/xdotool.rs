//! Xdotool copy trigger for X11 support

use async_trait::async_trait;

use crate::application::ports::{CopyTrigger, CopyTriggerError};

use super::command::run_tool;

/// Arguments sending Ctrl+C with held modifiers cleared first
pub(super) const XDOTOOL_ARGS: &[&str] = &["key", "--clearmodifiers", "ctrl+c"];

/// Xdotool copy trigger for X11 sessions
pub struct XdotoolCopyTrigger;

impl XdotoolCopyTrigger {
    /// Create a new xdotool copy trigger
    pub fn new() -> Self {
        Self
    }
}

impl Default for XdotoolCopyTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CopyTrigger for XdotoolCopyTrigger {
    async fn trigger_copy(&self) -> Result<(), CopyTriggerError> {
        run_tool("xdotool", XDOTOOL_ARGS).await
    }
}
