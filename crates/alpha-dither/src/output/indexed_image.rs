//! Palette-indexed image produced by dithering.

use crate::color::Rgba;
use crate::palette::Palette;

/// One palette index per pixel in row-major order, plus the palette.
///
/// # Example
///
/// ```
/// use alpha_dither::{IndexedImage, Palette, Rgba};
///
/// let palette = Palette::new(&[Rgba::TRANSPARENT, Rgba::opaque(9, 9, 9)]).unwrap();
/// let image = IndexedImage::new(vec![0, 1, 1, 0], 2, 2, palette);
///
/// assert_eq!(image.transparent_index(), Some(0));
/// assert_eq!(image.to_rgba()[1], Rgba::opaque(9, 9, 9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl IndexedImage {
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(indices.len(), width * height);
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn transparent_index(&self) -> Option<u8> {
        self.palette.transparent_index()
    }

    /// Consume the image, returning indices and palette.
    pub fn into_parts(self) -> (Vec<u8>, Palette) {
        (self.indices, self.palette)
    }

    /// Expand indices back to RGBA through the palette.
    pub fn to_rgba(&self) -> Vec<Rgba> {
        self.indices
            .iter()
            .map(|&i| self.palette.get(i as usize))
            .collect()
    }
}
