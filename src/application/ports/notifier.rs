//! Desktop notification port

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::ContentKind;

/// Longest alt text shown in a notification body, in characters
pub const PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// How a run ended, as shown on the desktop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Alt text is on the clipboard
    Ready,
    /// Nothing usable was copied
    NothingCopied,
    /// The description service failed
    Failed,
}

/// A desktop notification describing the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub summary: String,
    pub body: String,
}

impl Notice {
    /// Alt text for `kind` was generated; the body previews it
    pub fn ready(kind: ContentKind, alt_text: &str) -> Self {
        Self {
            level: NoticeLevel::Ready,
            summary: format!("Alt text copied ({})", kind),
            body: preview(alt_text),
        }
    }

    pub fn nothing_copied() -> Self {
        Self {
            level: NoticeLevel::NothingCopied,
            summary: "No valid content found".to_string(),
            body: "Highlight text or an image, then try again.".to_string(),
        }
    }

    pub fn failed(kind: ContentKind) -> Self {
        Self {
            level: NoticeLevel::Failed,
            summary: "Failed to generate alt text".to_string(),
            body: format!("The {} on the clipboard was left unchanged.", kind),
        }
    }

    /// Freedesktop icon name for the level
    pub const fn icon_name(&self) -> &'static str {
        match self.level {
            NoticeLevel::Ready => "edit-copy",
            NoticeLevel::NothingCopied => "dialog-warning",
            NoticeLevel::Failed => "dialog-error",
        }
    }
}

/// Shorten alt text to [`PREVIEW_CHARS`] characters, ending with an ellipsis
fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show `notice`. Callers treat failures as non-fatal.
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError>;
}

#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
        self.as_ref().notify(notice).await
    }
}
