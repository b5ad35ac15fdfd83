//! Image bitmap value object

use std::fmt;
use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::domain::error::ImageEncodeError;

/// MIME type used for every image sent to the description service
pub const PNG_MIME_TYPE: &str = "image/png";

/// Value object holding an uncompressed RGBA8 bitmap read from the clipboard.
///
/// The pixel buffer is tightly packed, row-major, four bytes per pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBitmap {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl ImageBitmap {
    /// Create a bitmap from raw RGBA8 bytes.
    ///
    /// Fails if the buffer length does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, ImageEncodeError> {
        if width == 0 || height == 0 {
            return Err(ImageEncodeError::EmptyBitmap);
        }

        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(ImageEncodeError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    /// Decode an image file offered under `mime_type` (`image/jpeg`, ...).
    ///
    /// Unknown MIME types fall back to sniffing the file header.
    pub fn from_encoded(data: &[u8], mime_type: &str) -> Result<Self, ImageEncodeError> {
        let decoded = match ImageFormat::from_mime_type(mime_type) {
            Some(format) => image::load_from_memory_with_format(data, format),
            None => image::load_from_memory(data),
        }
        .map_err(|e| ImageEncodeError::DecodeFailed(e.to_string()))?
        .to_rgba8();

        let (width, height) = decoded.dimensions();
        Self::from_rgba(width, height, decoded.into_raw())
    }

    /// Pixel dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Encode the bitmap as a PNG file
    pub fn to_png(&self) -> Result<Vec<u8>, ImageEncodeError> {
        let buffer = RgbaImage::from_raw(self.width, self.height, self.bytes.clone()).ok_or(
            ImageEncodeError::BufferSizeMismatch {
                width: self.width,
                height: self.height,
                expected: self.width as usize * self.height as usize * 4,
                actual: self.bytes.len(),
            },
        )?;

        let mut png = Vec::new();
        buffer
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| ImageEncodeError::EncodeFailed(e.to_string()))?;

        Ok(png)
    }

    /// Encode the bitmap as base64 PNG
    pub fn to_base64_png(&self) -> Result<String, ImageEncodeError> {
        use base64::Engine;
        let png = self.to_png()?;
        Ok(base64::engine::general_purpose::STANDARD.encode(png))
    }

    /// Encode the bitmap as a `data:image/png;base64,...` URI
    pub fn to_data_uri(&self) -> Result<String, ImageEncodeError> {
        Ok(format!(
            "data:{};base64,{}",
            PNG_MIME_TYPE,
            self.to_base64_png()?
        ))
    }
}

// Pixel data is omitted; a screenshot would flood the logs.
impl fmt::Debug for ImageBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
