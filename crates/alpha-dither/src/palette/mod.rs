//! Palette types and utilities
//!
//! This module provides the indexed-color [`Palette`] consumed by the
//! ditherers and its validation error type.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, MAX_PALETTE_LEN};
