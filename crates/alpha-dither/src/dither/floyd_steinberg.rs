//! Floyd-Steinberg error diffusion.

use crate::api::DitherError;
use crate::color::Rgba;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, DitherOptions, ErrorDiffusion, Kernel, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// Distributes all of the quantization error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// This is the algorithm used for GIF output unless configured otherwise.
#[derive(Debug, Clone, Default)]
pub struct FloydSteinberg {
    options: DitherOptions,
}

impl FloydSteinberg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DitherOptions) -> Self {
        Self { options }
    }
}

impl ErrorDiffusion for FloydSteinberg {
    fn kernel(&self) -> &Kernel {
        &FLOYD_STEINBERG
    }

    fn options(&self) -> &DitherOptions {
        &self.options
    }
}

impl Dither for FloydSteinberg {
    fn dither(
        &self,
        image: &[Rgba],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, DitherError> {
        dither_with_kernel(image, width, height, palette, &FLOYD_STEINBERG, &self.options, |_| None)
    }
}
