//! Unified error type for the alpha-dither public API.

use std::fmt;

/// Errors produced while dithering to a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// The pixel buffer does not hold `width * height` pixels.
    DimensionMismatch { expected: usize, actual: usize },
    /// A visible pixel met a palette without any visible entry.
    NoVisibleEntry,
    /// Transparency preservation was requested but index 0 of the palette
    /// is not fully transparent.
    NoTransparentIndex,
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::DimensionMismatch { expected, actual } => write!(
                f,
                "pixel buffer has {} pixels, expected {}",
                actual, expected
            ),
            DitherError::NoVisibleEntry => {
                write!(f, "palette has no visible entry for an opaque pixel")
            }
            DitherError::NoTransparentIndex => {
                write!(f, "palette does not reserve index 0 for transparency")
            }
        }
    }
}

impl std::error::Error for DitherError {}
