//! Clipboard port interfaces

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::ClipboardContent;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("{0} not found. Please install wl-clipboard.")]
    ToolNotFound(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),
}

/// Port for reading and classifying clipboard content
#[async_trait]
pub trait ClipboardReader: Send + Sync {
    /// Read the clipboard and classify it as image, text or empty.
    ///
    /// An image must be reported as `Image` even if text is also present.
    /// The clipboard handle is released before this returns, on every path.
    async fn read(&self) -> Result<ClipboardContent, ClipboardError>;
}

/// Port for writing text to the clipboard
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Replace the clipboard content with plain text.
    ///
    /// # Arguments
    /// * `text` - The text to copy
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed reader types
#[async_trait]
impl ClipboardReader for Box<dyn ClipboardReader> {
    async fn read(&self) -> Result<ClipboardContent, ClipboardError> {
        self.as_ref().read().await
    }
}

/// Blanket implementation for boxed writer types
#[async_trait]
impl ClipboardWriter for Box<dyn ClipboardWriter> {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_text(text).await
    }
}
