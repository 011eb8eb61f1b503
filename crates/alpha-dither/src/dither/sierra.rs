//! Sierra Lite error diffusion.

use crate::api::DitherError;
use crate::color::Rgba;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, DitherOptions, ErrorDiffusion, Kernel, SIERRA_LITE};

/// Sierra Lite error diffusion dithering.
///
/// The smallest full-propagation kernel, 3 neighbors:
///
/// ```text
///        X   2
///    1   1
/// ```
#[derive(Debug, Clone, Default)]
pub struct SierraLite {
    options: DitherOptions,
}

impl SierraLite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DitherOptions) -> Self {
        Self { options }
    }
}

impl ErrorDiffusion for SierraLite {
    fn kernel(&self) -> &Kernel {
        &SIERRA_LITE
    }

    fn options(&self) -> &DitherOptions {
        &self.options
    }
}

impl Dither for SierraLite {
    fn dither(
        &self,
        image: &[Rgba],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, DitherError> {
        dither_with_kernel(image, width, height, palette, &SIERRA_LITE, &self.options, |_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_gray_row_alternates() {
        let palette = Palette::new(&[Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
        let image = vec![Rgba::opaque(128, 128, 128); 6];
        let out = SierraLite::new().dither(&image, 6, 1, &palette).unwrap();
        assert_eq!(out, vec![1, 0, 1, 0, 1, 0]);
    }
}
