//! Transparency-preserving decorator for error diffusion.

use crate::api::DitherError;
use crate::color::Rgba;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, ErrorDiffusion};

/// Runs a base error diffuser while keeping fully transparent pixels out of
/// the diffusion entirely.
///
/// A pixel with alpha 0 is assigned the palette's transparent index
/// directly: error accumulated at its position is dropped and it spreads no
/// error of its own. Every other pixel is matched against visible palette
/// entries only, so the set of positions mapped to the transparent index is
/// exactly the set of transparent input pixels.
///
/// The palette must reserve a transparent entry (see
/// [`Palette::transparent_index`]).
#[derive(Debug, Clone, Default)]
pub struct PreserveTransparency<D> {
    inner: D,
}

impl<D> PreserveTransparency<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: ErrorDiffusion> Dither for PreserveTransparency<D> {
    fn dither(
        &self,
        image: &[Rgba],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, DitherError> {
        let transparent = palette
            .transparent_index()
            .ok_or(DitherError::NoTransparentIndex)?;

        dither_with_kernel(
            image,
            width,
            height,
            palette,
            self.inner.kernel(),
            self.inner.options(),
            |px: Rgba| px.is_transparent().then_some(transparent),
        )
    }
}
