//! Wtype copy trigger for Wayland support

use async_trait::async_trait;

use crate::application::ports::{CopyTrigger, CopyTriggerError};

use super::command::run_tool;

/// Modifier down, tap c, modifier up
pub(super) const WTYPE_ARGS: &[&str] = &["-M", "ctrl", "-k", "c", "-m", "ctrl"];

/// Wtype copy trigger using the Wayland virtual keyboard protocol
pub struct WtypeCopyTrigger;

impl WtypeCopyTrigger {
    /// Create a new wtype copy trigger
    pub fn new() -> Self {
        Self
    }
}

impl Default for WtypeCopyTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CopyTrigger for WtypeCopyTrigger {
    async fn trigger_copy(&self) -> Result<(), CopyTriggerError> {
        run_tool("wtype", WTYPE_ARGS).await
    }
}
