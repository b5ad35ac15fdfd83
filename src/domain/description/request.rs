//! Description request value object

use crate::domain::content::{ClipboardContent, ContentKind, ImageBitmap};

use super::prompt::DescriptionPrompt;

/// Classified clipboard content together with the prompt for its kind.
///
/// There is no empty variant: empty content never reaches the describer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionRequest {
    Image {
        prompt: DescriptionPrompt,
        image: ImageBitmap,
    },
    Text {
        prompt: DescriptionPrompt,
        text: String,
    },
}

impl DescriptionRequest {
    /// Build a request from clipboard content, or `None` for empty content
    pub fn from_content(content: ClipboardContent) -> Option<Self> {
        match content {
            ClipboardContent::Image(image) => Some(Self::Image {
                prompt: DescriptionPrompt::for_image(),
                image,
            }),
            ClipboardContent::Text(text) => Some(Self::Text {
                prompt: DescriptionPrompt::for_text(&text),
                text,
            }),
            ClipboardContent::Empty => None,
        }
    }

    pub fn prompt(&self) -> &DescriptionPrompt {
        match self {
            Self::Image { prompt, .. } | Self::Text { prompt, .. } => prompt,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Image { .. } => ContentKind::Image,
            Self::Text { .. } => ContentKind::Text,
        }
    }
}
