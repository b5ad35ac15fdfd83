//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;
use log::debug;

use crate::application::ports::{ClipboardError, ClipboardReader, ClipboardWriter};
use crate::domain::content::{ClipboardContent, ImageBitmap};

/// Cross-platform clipboard adapter using arboard
///
/// A fresh `arboard::Clipboard` is opened for every access and dropped
/// before returning, so the OS clipboard is never held between calls.
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }

    fn read_blocking() -> Result<ClipboardContent, ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;

        let image = match clipboard.get_image() {
            Ok(data) => {
                debug!("Clipboard offers a {}x{} image", data.width, data.height);
                let bitmap = ImageBitmap::from_rgba(
                    data.width as u32,
                    data.height as u32,
                    data.bytes.into_owned(),
                )
                .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;
                Some(bitmap)
            }
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(e) => return Err(ClipboardError::ReadFailed(e.to_string())),
        };

        // Image takes precedence; text is not even requested
        if image.is_some() {
            return Ok(ClipboardContent::classify(image, None));
        }

        let text = match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(e) => return Err(ClipboardError::ReadFailed(e.to_string())),
        };

        Ok(ClipboardContent::classify(None, text))
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardReader for ArboardClipboard {
    async fn read(&self) -> Result<ClipboardContent, ClipboardError> {
        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(Self::read_blocking)
            .await
            .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl ClipboardWriter for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;

            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_creates_successfully() {
        let _clipboard = ArboardClipboard::new();
    }

    #[test]
    fn clipboard_default_creates() {
        let _clipboard = ArboardClipboard::default();
    }
}
