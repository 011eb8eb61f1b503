//! GifDitherer builder: quantize and dither in one call.

use crate::color::Rgba;
use crate::dither::{
    Atkinson, Dither, DitherAlgorithm, DitherOptions, FloydSteinberg, PreserveTransparency,
    SierraLite,
};
use crate::output::IndexedImage;
use crate::quantize::{quantize_with, MedianCut, TransparentSlot};

use super::DitherError;

/// Builder for reducing an RGBA image to a GIF-ready indexed image.
///
/// The palette is chosen with median cut, index 0 is reserved for full
/// transparency, and the pixels are error-diffused with transparent pixels
/// kept out of the diffusion.
///
/// # Example
///
/// ```
/// use alpha_dither::{DitherAlgorithm, GifDitherer, Rgba};
///
/// let pixels = vec![
///     Rgba::opaque(255, 0, 0),
///     Rgba::TRANSPARENT,
///     Rgba::opaque(0, 0, 255),
///     Rgba::opaque(255, 0, 0),
/// ];
/// let image = GifDitherer::new()
///     .algorithm(DitherAlgorithm::Atkinson)
///     .dither(&pixels, 2, 2)
///     .unwrap();
///
/// assert_eq!(image.transparent_index(), Some(0));
/// assert_eq!(image.indices()[1], 0);
/// assert_eq!(image.to_rgba(), pixels);
/// ```
#[derive(Debug, Clone)]
pub struct GifDitherer {
    algorithm: DitherAlgorithm,
    max_colors: usize,
    options: DitherOptions,
}

impl Default for GifDitherer {
    fn default() -> Self {
        Self {
            algorithm: DitherAlgorithm::default(),
            max_colors: 256,
            options: DitherOptions::default(),
        }
    }
}

impl GifDitherer {
    pub const MIN_COLORS: usize = 2;
    pub const MAX_COLORS: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Palette size including the transparent slot, clamped to `2..=256`.
    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors.clamp(Self::MIN_COLORS, Self::MAX_COLORS);
        self
    }

    pub fn error_clamp(mut self, clamp: f32) -> Self {
        self.options = self.options.error_clamp(clamp);
        self
    }

    pub fn get_algorithm(&self) -> DitherAlgorithm {
        self.algorithm
    }

    pub fn get_max_colors(&self) -> usize {
        self.max_colors
    }

    pub fn options(&self) -> &DitherOptions {
        &self.options
    }

    /// Quantize and dither `pixels` (row-major, `width * height`).
    pub fn dither(
        &self,
        pixels: &[Rgba],
        width: usize,
        height: usize,
    ) -> Result<IndexedImage, DitherError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(DitherError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let palette = quantize_with(&TransparentSlot::new(MedianCut), pixels, self.max_colors);

        let options = self.options.clone();
        let indices = match self.algorithm {
            DitherAlgorithm::FloydSteinberg => {
                PreserveTransparency::new(FloydSteinberg::with_options(options))
                    .dither(pixels, width, height, &palette)?
            }
            DitherAlgorithm::Atkinson => PreserveTransparency::new(Atkinson::with_options(options))
                .dither(pixels, width, height, &palette)?,
            DitherAlgorithm::SierraLite => {
                PreserveTransparency::new(SierraLite::with_options(options))
                    .dither(pixels, width, height, &palette)?
            }
        };

        Ok(IndexedImage::new(indices, width, height, palette))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_max_colors_clamped() {
        assert_eq!(GifDitherer::new().max_colors(0).get_max_colors(), 2);
        assert_eq!(GifDitherer::new().max_colors(1000).get_max_colors(), 256);
        assert_eq!(GifDitherer::new().max_colors(16).get_max_colors(), 16);
    }

    #[test]
    fn test_palette_respects_max_colors() {
        let pixels: Vec<Rgba> = (0..=255u8).map(|v| Rgba::opaque(v, 255 - v, v / 3)).collect();
        let image = GifDitherer::new().max_colors(8).dither(&pixels, 16, 16).unwrap();
        assert_eq!(image.palette().len(), 8);
        assert!(image.indices().iter().all(|&i| (i as usize) < 8));
        assert!(image.indices().iter().all(|&i| i != 0));
    }

    #[test]
    fn test_dimension_mismatch_reported_before_quantizing() {
        let err = GifDitherer::new().dither(&[Rgba::TRANSPARENT; 3], 2, 2).unwrap_err();
        assert_eq!(err, DitherError::DimensionMismatch { expected: 4, actual: 3 });
    }

    #[test]
    fn test_every_algorithm_preserves_transparency() {
        let pixels: Vec<Rgba> = (0..100u32)
            .map(|i| {
                if i % 7 == 0 {
                    Rgba::TRANSPARENT
                } else {
                    Rgba::opaque((i * 2) as u8, (i * 5 % 256) as u8, 40)
                }
            })
            .collect();
        for algorithm in DitherAlgorithm::ALL {
            let image = GifDitherer::new()
                .algorithm(algorithm)
                .max_colors(4)
                .dither(&pixels, 10, 10)
                .unwrap();
            for (px, &idx) in pixels.iter().zip(image.indices()) {
                assert_eq!(px.is_transparent(), idx == 0, "{algorithm}");
            }
        }
    }

    #[test]
    fn test_all_transparent_image() {
        let image = GifDitherer::new().dither(&[Rgba::TRANSPARENT; 6], 3, 2).unwrap();
        assert_eq!(image.palette().len(), 1);
        assert_eq!(image.indices(), &[0; 6]);
    }
}
