//! Reserve palette index 0 for full transparency.

use super::Quantize;
use crate::color::Rgba;
use crate::palette::MAX_PALETTE_LEN;

/// Wraps a base quantizer and forces index 0 to `(0, 0, 0, 0)`.
///
/// The base palette's first entry is overwritten. When the base used fewer
/// colors than allowed, the displaced color is appended at the end so no
/// representative is lost; at full capacity it is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransparentSlot<Q> {
    base: Q,
}

impl<Q> TransparentSlot<Q> {
    pub fn new(base: Q) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Q {
        &self.base
    }
}

impl<Q: Quantize> Quantize for TransparentSlot<Q> {
    fn quantize(&self, pixels: &[Rgba], max_colors: usize) -> Vec<Rgba> {
        let max_colors = max_colors.clamp(1, MAX_PALETTE_LEN);

        let mut colors = self.base.quantize(pixels, max_colors);
        colors.truncate(max_colors);
        if colors.is_empty() {
            return vec![Rgba::TRANSPARENT];
        }

        let displaced = std::mem::replace(&mut colors[0], Rgba::TRANSPARENT);
        if colors.len() < max_colors && !displaced.is_transparent() {
            colors.push(displaced);
        }
        colors
    }
}
