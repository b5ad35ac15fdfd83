//! Desktop notifications through notify-rust

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{NotificationError, Notice, NoticeLevel, Notifier};

/// Application name shown by the notification daemon
const APP_NAME: &str = "AltScribe";

/// How long a notice stays on screen
fn timeout_for(level: NoticeLevel) -> Timeout {
    match level {
        // Long enough to read the preview
        NoticeLevel::Ready => Timeout::Milliseconds(8_000),
        NoticeLevel::NothingCopied | NoticeLevel::Failed => Timeout::Milliseconds(5_000),
    }
}

/// Shows each notice as a single desktop notification
pub struct NotifyRustNotifier;

impl NotifyRustNotifier {
    pub fn new() -> Self {
        Self
    }

    fn build(notice: &Notice) -> Notification {
        let mut notification = Notification::new();
        notification
            .appname(APP_NAME)
            .summary(&notice.summary)
            .body(&notice.body)
            .icon(notice.icon_name())
            .timeout(timeout_for(notice.level));
        notification
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
        let notification = Self::build(notice);

        // D-Bus round trip blocks
        tokio::task::spawn_blocking(move || {
            notification
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}
