//! Generate alt text use case

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;

use crate::domain::config::DEFAULT_COPY_DELAY_MS;
use crate::domain::content::{ClipboardContent, ContentKind};
use crate::domain::description::DescriptionRequest;

use super::ports::{
    ClipboardError, ClipboardReader, ClipboardWriter, CopyTrigger, Describer, Notice, Notifier,
};

/// Errors from the alt text use case
#[derive(Debug, Error)]
pub enum AltTextError {
    #[error("Failed to write alt text to clipboard: {0}")]
    ClipboardWrite(#[from] ClipboardError),

    #[error("Missing API key. Set OPENAI_API_KEY or configure via 'alt-scribe config set api_key <key>'")]
    MissingApiKey,
}

/// Input parameters for the alt text use case
#[derive(Debug, Clone)]
pub struct AltTextInput {
    /// Whether to send the copy shortcut before reading the clipboard
    pub trigger_copy: bool,
    /// Pause between the copy shortcut and the clipboard read
    pub copy_delay: Duration,
    /// Whether to show notifications
    pub enable_notify: bool,
}

impl Default for AltTextInput {
    fn default() -> Self {
        Self {
            trigger_copy: true,
            copy_delay: Duration::from_millis(DEFAULT_COPY_DELAY_MS),
            enable_notify: false,
        }
    }
}

/// How a run ended, short of a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AltTextOutcome {
    /// The description was written to the clipboard
    Copied { kind: ContentKind, text: String },
    /// The clipboard held nothing usable; nothing was sent or written
    NoContent,
    /// The describer failed; the clipboard was left untouched
    DescriptionFailed { kind: ContentKind },
}

impl AltTextOutcome {
    /// The generated alt text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Copied { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct AltTextCallbacks {
    /// Called before the copy shortcut is sent
    pub on_copy_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called once the clipboard has been classified
    pub on_content_read: Option<Box<dyn Fn(ContentKind) + Send + Sync>>,
    /// Called when the description request starts
    pub on_describing_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the description request ends, with whether it succeeded
    pub on_describing_end: Option<Box<dyn Fn(bool) + Send + Sync>>,
}

/// One-shot alt text use case: copy, read, describe, write back
pub struct GenerateAltTextUseCase<T, R, W, D, N>
where
    T: CopyTrigger,
    R: ClipboardReader,
    W: ClipboardWriter,
    D: Describer + 'static,
    N: Notifier,
{
    trigger: T,
    reader: R,
    writer: W,
    describer: Arc<D>,
    notifier: N,
}

impl<T, R, W, D, N> GenerateAltTextUseCase<T, R, W, D, N>
where
    T: CopyTrigger,
    R: ClipboardReader,
    W: ClipboardWriter,
    D: Describer + 'static,
    N: Notifier,
{
    /// Create a new use case instance
    pub fn new(trigger: T, reader: R, writer: W, describer: D, notifier: N) -> Self {
        Self {
            trigger,
            reader,
            writer,
            describer: Arc::new(describer),
            notifier,
        }
    }

    /// Send the copy shortcut, then wait for the clipboard to settle.
    ///
    /// Best effort: a failed shortcut is logged and the run continues with
    /// whatever the clipboard already holds.
    pub async fn trigger_copy(&self, settle: Duration) {
        if let Err(e) = self.trigger.trigger_copy().await {
            warn!("Copy shortcut failed: {}", e);
        }
        if !settle.is_zero() {
            tokio::time::sleep(settle).await;
        }
    }

    /// Read the clipboard; read errors degrade to `Empty`.
    pub async fn read_clipboard(&self) -> ClipboardContent {
        match self.reader.read().await {
            Ok(content) => {
                debug!("Clipboard classified as {}", content.kind());
                content
            }
            Err(e) => {
                warn!("Error accessing clipboard: {}", e);
                ClipboardContent::Empty
            }
        }
    }

    /// Describe the content.
    ///
    /// Empty content returns `None` without contacting the describer. The
    /// request runs on its own task and this call suspends until it settles;
    /// any failure is logged and turned into `None`.
    pub async fn describe(&self, content: ClipboardContent) -> Option<String> {
        let request = DescriptionRequest::from_content(content)?;
        let kind = request.kind();

        let describer = Arc::clone(&self.describer);
        let task = tokio::spawn(async move { describer.describe(&request).await });

        let text = match task.await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Failed to describe {}: {}", kind, e);
                return None;
            }
            Err(e) => {
                warn!("Description task failed: {}", e);
                return None;
            }
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            warn!("Model returned an empty description for {}", kind);
            return None;
        }

        Some(trimmed.to_string())
    }

    /// Execute the full workflow
    pub async fn execute(
        &self,
        input: AltTextInput,
        callbacks: AltTextCallbacks,
    ) -> Result<AltTextOutcome, AltTextError> {
        if input.trigger_copy {
            if let Some(ref cb) = callbacks.on_copy_start {
                cb();
            }
            self.trigger_copy(input.copy_delay).await;
        }

        let content = self.read_clipboard().await;
        let kind = content.kind();

        if let Some(ref cb) = callbacks.on_content_read {
            cb(kind);
        }

        if content.is_empty() {
            self.notify(&input, Notice::nothing_copied()).await;
            return Ok(AltTextOutcome::NoContent);
        }

        if let Some(ref cb) = callbacks.on_describing_start {
            cb();
        }

        let description = self.describe(content).await;

        if let Some(ref cb) = callbacks.on_describing_end {
            cb(description.is_some());
        }

        let Some(text) = description else {
            self.notify(&input, Notice::failed(kind)).await;
            return Ok(AltTextOutcome::DescriptionFailed { kind });
        };

        // The only fatal step
        self.writer.write_text(&text).await?;

        self.notify(&input, Notice::ready(kind, &text)).await;

        Ok(AltTextOutcome::Copied { kind, text })
    }

    async fn notify(&self, input: &AltTextInput, notice: Notice) {
        if !input.enable_notify {
            return;
        }
        if let Err(e) = self.notifier.notify(&notice).await {
            debug!("Notification failed: {}", e);
        }
    }
}
