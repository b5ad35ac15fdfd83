//! Ydotool copy trigger for Wayland support

use async_trait::async_trait;

use crate::application::ports::{CopyTrigger, CopyTriggerError};

use super::command::run_tool;

/// Raw evdev codes: KEY_LEFTCTRL (29) down, KEY_C (46) down, 46 up, 29 up
pub(super) const YDOTOOL_ARGS: &[&str] = &["key", "29:1", "46:1", "46:0", "29:0"];

/// Ydotool copy trigger
///
/// Requires ydotoold daemon to be running and user to be in the input group.
pub struct YdotoolCopyTrigger;

impl YdotoolCopyTrigger {
    /// Create a new ydotool copy trigger
    pub fn new() -> Self {
        Self
    }
}

impl Default for YdotoolCopyTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CopyTrigger for YdotoolCopyTrigger {
    async fn trigger_copy(&self) -> Result<(), CopyTriggerError> {
        run_tool("ydotool", YDOTOOL_ARGS).await
    }
}
