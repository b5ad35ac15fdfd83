//! No-op copy trigger

use async_trait::async_trait;

use crate::application::ports::{CopyTrigger, CopyTriggerError};

/// Copy trigger that does nothing
///
/// Used when triggering is disabled and the clipboard is read as-is.
pub struct NoOpCopyTrigger;

impl NoOpCopyTrigger {
    /// Create a new no-op copy trigger
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpCopyTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CopyTrigger for NoOpCopyTrigger {
    async fn trigger_copy(&self) -> Result<(), CopyTriggerError> {
        Ok(())
    }
}
