//! Atkinson error diffusion.

use crate::api::DitherError;
use crate::color::Rgba;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, DitherOptions, ErrorDiffusion, Kernel, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// Propagates only 6/8 of the error, trading smoothness for contrast.
/// Flat areas near a palette color stay clean instead of speckling.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
#[derive(Debug, Clone, Default)]
pub struct Atkinson {
    options: DitherOptions,
}

impl Atkinson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DitherOptions) -> Self {
        Self { options }
    }
}

impl ErrorDiffusion for Atkinson {
    fn kernel(&self) -> &Kernel {
        &ATKINSON
    }

    fn options(&self) -> &DitherOptions {
        &self.options
    }
}

impl Dither for Atkinson {
    fn dither(
        &self,
        image: &[Rgba],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, DitherError> {
        dither_with_kernel(image, width, height, palette, &ATKINSON, &self.options, |_| None)
    }
}
