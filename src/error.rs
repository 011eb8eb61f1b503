use std::path::PathBuf;

use thiserror::Error;

use crate::models::SourceFormat;

/// Failures of the image pipeline entry points.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to decode {format} image: {source}")]
    Decode {
        format: SourceFormat,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid geometry {width}x{height}: {reason}")]
    InvalidGeometry {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Mask {path} differs from the mask already in use")]
    MaskConflict { path: PathBuf },
}

impl ImageError {
    /// Whether the failure is caused by the submitted image rather than by
    /// the process. Callers serving uploads report these back to the client
    /// and treat everything else as an internal fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ImageError::UnsupportedFormat(_)
                | ImageError::Decode { .. }
                | ImageError::InvalidGeometry { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode asset {name}: {reason}")]
    Decode { name: String, reason: String },
}
