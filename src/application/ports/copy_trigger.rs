//! Copy trigger port interface

use async_trait::async_trait;
use thiserror::Error;

/// Copy trigger errors
#[derive(Debug, Clone, Error)]
pub enum CopyTriggerError {
    #[error("{0} not found or not available")]
    ToolNotFound(String),

    #[error("No copy tool available")]
    NoToolAvailable,

    #[error("Failed to send copy shortcut: {0}")]
    TriggerFailed(String),
}

/// Port for simulating the system "copy" shortcut
#[async_trait]
pub trait CopyTrigger: Send + Sync {
    /// Press and release the copy key-chord (modifier down, key down,
    /// key up, modifier up) in the currently focused window.
    async fn trigger_copy(&self) -> Result<(), CopyTriggerError>;
}

/// Blanket implementation for boxed trigger types
#[async_trait]
impl CopyTrigger for Box<dyn CopyTrigger> {
    async fn trigger_copy(&self) -> Result<(), CopyTriggerError> {
        self.as_ref().trigger_copy().await
    }
}
