//! Color quantization.
//!
//! A quantizer reduces the colors of an image to a palette of at most
//! `max_colors` entries. Quantizers compose: [`TransparentSlot`] wraps any
//! base [`Quantize`] implementation and reserves palette index 0 for full
//! transparency, which is what GIF output needs.
//!
//! # Example
//!
//! ```
//! use alpha_dither::{MedianCut, Quantize, Rgba, TransparentSlot};
//!
//! let pixels = vec![Rgba::opaque(255, 0, 0), Rgba::TRANSPARENT, Rgba::opaque(0, 0, 255)];
//! let colors = TransparentSlot::new(MedianCut).quantize(&pixels, 256);
//! assert_eq!(colors[0], Rgba::TRANSPARENT);
//! assert_eq!(colors.len(), 3);
//! ```

mod median_cut;
mod transparent_slot;

pub use median_cut::MedianCut;
pub use transparent_slot::TransparentSlot;

use crate::color::Rgba;
use crate::palette::{Palette, MAX_PALETTE_LEN};

/// Trait for palette selection algorithms.
pub trait Quantize {
    /// Select up to `max_colors` representative colors for `pixels`.
    ///
    /// Implementations must be deterministic: the same pixels always yield
    /// the same colors in the same order.
    fn quantize(&self, pixels: &[Rgba], max_colors: usize) -> Vec<Rgba>;
}

/// Median-cut quantization to at most 256 colors with index 0 forced to
/// fully transparent.
///
/// The returned palette always satisfies `palette.get(0) == Rgba::TRANSPARENT`
/// and `palette.len() <= 256`, including for images without a single
/// visible pixel (which yield the one-entry palette `[TRANSPARENT]`).
pub fn quantize(pixels: &[Rgba]) -> Palette {
    quantize_with(&TransparentSlot::new(MedianCut), pixels, MAX_PALETTE_LEN)
}

/// Run any quantizer whose output is known to fit a palette.
pub fn quantize_with<Q: Quantize>(quantizer: &Q, pixels: &[Rgba], max_colors: usize) -> Palette {
    let max_colors = max_colors.clamp(1, MAX_PALETTE_LEN);
    let mut colors = quantizer.quantize(pixels, max_colors);
    colors.truncate(max_colors);
    if colors.is_empty() {
        colors.push(Rgba::TRANSPARENT);
    }
    Palette::from_quantized(colors)
}
