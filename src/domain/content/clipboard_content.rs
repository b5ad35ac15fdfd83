//! Clipboard content value object

use std::fmt;

use super::image_bitmap::ImageBitmap;

/// Payload-free tag for a [`ClipboardContent`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Image,
    Text,
    Empty,
}

impl ContentKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the clipboard held at the time of reading.
///
/// Exactly one variant is active. When the clipboard offers both an image
/// and text, readers must produce `Image`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClipboardContent {
    Image(ImageBitmap),
    Text(String),
    #[default]
    Empty,
}

impl ClipboardContent {
    /// Classify the formats a clipboard offered.
    ///
    /// Image beats text; blank text counts as absent.
    pub fn classify(image: Option<ImageBitmap>, text: Option<String>) -> Self {
        match (image, text) {
            (Some(image), _) => Self::Image(image),
            (None, Some(text)) if !text.trim().is_empty() => Self::Text(text),
            _ => Self::Empty,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Image(_) => ContentKind::Image,
            Self::Text(_) => ContentKind::Text,
            Self::Empty => ContentKind::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageBitmap {
        ImageBitmap::from_rgba(1, 1, vec![10, 20, 30, 255]).unwrap()
    }

    #[test]
    fn image_wins_over_text() {
        let content = ClipboardContent::classify(Some(pixel()), Some("hello".to_string()));
        assert_eq!(content.kind(), ContentKind::Image);
    }

    #[test]
    fn image_alone_is_image() {
        let content = ClipboardContent::classify(Some(pixel()), None);
        assert_eq!(content.kind(), ContentKind::Image);
    }

    #[test]
    fn text_alone_is_text() {
        let content = ClipboardContent::classify(None, Some("hello".to_string()));
        assert_eq!(content, ClipboardContent::Text("hello".to_string()));
    }

    #[test]
    fn nothing_is_empty() {
        let content = ClipboardContent::classify(None, None);
        assert!(content.is_empty());
    }

    #[test]
    fn blank_text_is_empty() {
        let content = ClipboardContent::classify(None, Some("  \n\t".to_string()));
        assert!(content.is_empty());
    }

    #[test]
    fn default_is_empty() {
        assert!(ClipboardContent::default().is_empty());
    }

    #[test]
    fn kind_display() {
        assert_eq!(ContentKind::Image.to_string(), "image");
        assert_eq!(ContentKind::Text.to_string(), "text");
        assert_eq!(ContentKind::Empty.to_string(), "empty");
    }
}
