use std::fmt;
use std::path::Path;

use crate::error::ImageError;

/// Input formats the pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    /// Resolve a declared MIME type. Only `image/jpeg` and `image/png` are
    /// accepted (case-insensitive); anything else is rejected before any
    /// decoding is attempted.
    pub fn from_mime(mime: &str) -> Result<Self, ImageError> {
        let mime = mime.trim();
        if mime.eq_ignore_ascii_case("image/jpeg") {
            Ok(SourceFormat::Jpeg)
        } else if mime.eq_ignore_ascii_case("image/png") {
            Ok(SourceFormat::Png)
        } else {
            Err(ImageError::UnsupportedFormat(mime.to_string()))
        }
    }

    /// Guess the format from a file extension (`jpg`, `jpeg`, `png`).
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("jpg" | "jpeg") => Ok(SourceFormat::Jpeg),
            Some("png") => Ok(SourceFormat::Png),
            _ => Err(ImageError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "image/jpeg",
            SourceFormat::Png => "image/png",
        }
    }

    pub(crate) fn image_format(self) -> image::ImageFormat {
        match self {
            SourceFormat::Jpeg => image::ImageFormat::Jpeg,
            SourceFormat::Png => image::ImageFormat::Png,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Jpeg => f.write_str("JPEG"),
            SourceFormat::Png => f.write_str("PNG"),
        }
    }
}

/// Encoded output bytes together with the content type to forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

impl Encoded {
    pub const PNG: &'static str = "image/png";
    pub const GIF: &'static str = "image/gif";

    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: Self::PNG,
        }
    }

    pub fn gif(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: Self::GIF,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
