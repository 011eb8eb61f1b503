//! Palette struct with nearest-color matching.
//!
//! A [`Palette`] is an ordered list of at most 256 colors. Entry 0 acts as
//! the transparent slot when it holds [`Rgba::TRANSPARENT`]; the
//! transparent-slot quantizer guarantees this for every palette it emits.

use super::error::PaletteError;
use crate::color::Rgba;

/// Largest palette the indexed color model can address.
pub const MAX_PALETTE_LEN: usize = 256;

/// An ordered color palette for indexed output.
///
/// # Matching
///
/// [`find_nearest()`](Palette::find_nearest) only ever returns entries with
/// nonzero alpha, so a visible pixel never lands on the transparent slot.
///
/// # Example
///
/// ```
/// use alpha_dither::{Palette, Rgba};
///
/// let palette = Palette::new(&[Rgba::TRANSPARENT, Rgba::opaque(255, 255, 255)]).unwrap();
/// assert_eq!(palette.transparent_index(), Some(0));
/// assert_eq!(palette.find_nearest([10.0, 10.0, 10.0]), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Create a palette from its entries.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::TooManyColors`] if there are more than 256 entries
    pub fn new(colors: &[Rgba]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_PALETTE_LEN {
            return Err(PaletteError::TooManyColors { len: colors.len() });
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Build a palette the quantizers already know to be valid.
    pub(crate) fn from_quantized(colors: Vec<Rgba>) -> Self {
        debug_assert!(!colors.is_empty() && colors.len() <= MAX_PALETTE_LEN);
        Self { colors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a constructed palette holds at least one entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Rgba {
        self.colors[index]
    }

    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Index of the reserved transparent slot, if entry 0 holds it.
    pub fn transparent_index(&self) -> Option<u8> {
        (self.colors[0] == Rgba::TRANSPARENT).then_some(0)
    }

    /// True if at least one entry can be matched by a visible pixel.
    pub fn has_visible_entry(&self) -> bool {
        self.colors.iter().any(|c| !c.is_transparent())
    }

    /// Find the visible entry closest to `rgb` (0..=255 scale).
    ///
    /// Distance is squared Euclidean over RGB. Fully transparent entries
    /// are skipped. Ties go to the lowest index, which keeps the result
    /// deterministic. Returns `None` when the palette has no visible entry.
    pub fn find_nearest(&self, rgb: [f32; 3]) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, color) in self.colors.iter().enumerate() {
            if color.is_transparent() {
                continue;
            }
            let [r, g, b] = color.rgb();
            let dr = rgb[0] - r;
            let dg = rgb[1] - g;
            let db = rgb[2] - b;
            let dist = dr * dr + dg * dg + db * db;
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Flat `[R, G, B, R, G, B, ...]` table, the layout GIF color tables use.
    pub fn to_rgb_table(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
    }
}
