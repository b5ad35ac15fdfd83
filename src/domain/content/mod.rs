//! Clipboard content domain module

mod clipboard_content;
mod image_bitmap;

pub use clipboard_content::{ClipboardContent, ContentKind};
pub use image_bitmap::{ImageBitmap, PNG_MIME_TYPE};
