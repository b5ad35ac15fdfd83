//! Wayland clipboard adapter using wl-clipboard (wl-paste / wl-copy)

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use image::ImageFormat;
use log::debug;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{ClipboardError, ClipboardReader, ClipboardWriter};
use crate::domain::content::{ClipboardContent, ImageBitmap, PNG_MIME_TYPE};

/// MIME types accepted as Unicode text
const TEXT_TYPES: &[&str] = &["text/plain;charset=utf-8", "UTF8_STRING", "text/plain"];

/// Wayland clipboard adapter using wl-paste and wl-copy
pub struct WaylandClipboard {
    paste_program: PathBuf,
    copy_program: PathBuf,
}

impl WaylandClipboard {
    /// Create an adapter that runs `wl-paste` and `wl-copy` from `PATH`
    pub fn new() -> Self {
        Self::with_programs("wl-paste", "wl-copy")
    }

    /// Use specific paste/copy executables
    pub fn with_programs(paste: impl Into<PathBuf>, copy: impl Into<PathBuf>) -> Self {
        Self {
            paste_program: paste.into(),
            copy_program: copy.into(),
        }
    }

    fn program_name(program: &Path) -> String {
        program.display().to_string()
    }

    /// Run wl-paste with the given args and return stdout, or `None` when
    /// the clipboard is empty (wl-paste exits non-zero).
    async fn paste(&self, args: &[&str]) -> Result<Option<Vec<u8>>, ClipboardError> {
        let output = Command::new(&self.paste_program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::ToolNotFound(Self::program_name(&self.paste_program))
                } else {
                    ClipboardError::ReadFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            debug!("wl-paste {:?} exited with status: {}", args, output.status);
            return Ok(None);
        }

        Ok(Some(output.stdout))
    }

    /// Pick the image MIME type to request: PNG, then any format we can
    /// decode, then whatever image type comes first
    fn image_type<'a>(offered: &[&'a str]) -> Option<&'a str> {
        let images = || offered.iter().copied().filter(|t| t.starts_with("image/"));

        images()
            .find(|t| *t == PNG_MIME_TYPE)
            .or_else(|| images().find(|t| ImageFormat::from_mime_type(t).is_some()))
            .or_else(|| images().next())
    }

    /// Pick the text MIME type to request from the offered ones
    fn text_type(offered: &[&str]) -> Option<&'static str> {
        TEXT_TYPES.iter().copied().find(|t| offered.contains(t))
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardReader for WaylandClipboard {
    async fn read(&self) -> Result<ClipboardContent, ClipboardError> {
        let Some(listing) = self.paste(&["--list-types"]).await? else {
            return Ok(ClipboardContent::Empty);
        };
        let listing = String::from_utf8_lossy(&listing);
        let offered: Vec<&str> = listing.lines().map(str::trim).collect();
        debug!("Clipboard offers: {:?}", offered);

        // An offered image always wins, whatever its format
        if let Some(mime) = Self::image_type(&offered) {
            if let Some(data) = self.paste(&["--type", mime]).await? {
                let bitmap = ImageBitmap::from_encoded(&data, mime)
                    .map_err(|e| ClipboardError::ReadFailed(format!("{}: {}", mime, e)))?;
                return Ok(ClipboardContent::classify(Some(bitmap), None));
            }
        }

        let Some(mime) = Self::text_type(&offered) else {
            return Ok(ClipboardContent::Empty);
        };

        let text = self
            .paste(&["--no-newline", "--type", mime])
            .await?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());

        Ok(ClipboardContent::classify(None, text))
    }
}

#[async_trait]
impl ClipboardWriter for WaylandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.copy_program)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::ToolNotFound(Self::program_name(&self.copy_program))
                } else {
                    ClipboardError::CopyFailed(e.to_string())
                }
            })?;

        // Write text to stdin, then close it so wl-copy sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
