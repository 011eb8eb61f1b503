//! Error types for palette operations

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette cannot be represented in the indexed color
/// model: it must hold between 1 and 256 entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// More entries than a `u8` index can address
    TooManyColors {
        /// Number of colors supplied
        len: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::TooManyColors { len } => {
                write!(f, "palette has {} colors, at most 256 are allowed", len)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
