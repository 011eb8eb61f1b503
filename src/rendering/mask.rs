//! The speech-bubble mask.
//!
//! The mask is an alpha-only image. Its native aspect ratio is kept when it
//! is resampled to a raster's width. One mask is shared by the whole
//! process: it is installed once at startup and never changes afterwards.

use std::sync::OnceLock;

use image::imageops::FilterType;
use image::{GrayImage, Luma};

use crate::assets::{AssetLoader, MASK_ASSET};
use crate::error::{AssetError, ImageError};

static SHARED: OnceLock<Mask> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    alpha: GrayImage,
}

impl Mask {
    /// Build a mask from an alpha channel. Empty images are rejected.
    pub fn from_alpha(alpha: GrayImage) -> Result<Self, AssetError> {
        if alpha.width() == 0 || alpha.height() == 0 {
            return Err(AssetError::Decode {
                name: MASK_ASSET.to_string(),
                reason: format!("mask is {}x{}", alpha.width(), alpha.height()),
            });
        }
        Ok(Self { alpha })
    }

    /// Decode a PNG and keep only its alpha channel.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
            .map_err(|e| AssetError::Decode {
                name: MASK_ASSET.to_string(),
                reason: e.to_string(),
            })?;
        let rgba = decoded.to_rgba8();
        let alpha = GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
            Luma([rgba.get_pixel(x, y)[3]])
        });
        Self::from_alpha(alpha)
    }

    /// Load the mask the loader points at (filesystem or embedded).
    pub fn load(loader: &AssetLoader) -> Result<Self, AssetError> {
        let bytes = loader.read_mask()?;
        let mask = Self::from_png_bytes(&bytes)?;
        tracing::info!(
            source = %loader.mask_source(),
            width = mask.width(),
            height = mask.height(),
            "Loaded bubble mask"
        );
        Ok(mask)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.alpha.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.alpha.height()
    }

    /// Alpha at `(x, y)`, with coordinates clamped to the mask bounds.
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        let x = x.min(self.width() - 1);
        let y = y.min(self.height() - 1);
        self.alpha.get_pixel(x, y)[0]
    }

    /// Height of the mask once resampled to `width`: `width * h / w`,
    /// rounded down.
    pub fn resampled_height(&self, width: u32) -> u32 {
        (width as u64 * self.height() as u64 / self.width() as u64) as u32
    }

    /// Lanczos3 resample to `width`, keeping the aspect ratio.
    pub fn resample(&self, width: u32) -> Result<Mask, ImageError> {
        let height = self.resampled_height(width);
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidGeometry {
                width,
                height,
                reason: "mask collapses to nothing at this width",
            });
        }
        if (width, height) == self.alpha.dimensions() {
            return Ok(self.clone());
        }
        let alpha = image::imageops::resize(&self.alpha, width, height, FilterType::Lanczos3);
        Ok(Mask { alpha })
    }
}

/// Install the process-wide mask.
///
/// Only the first call stores its mask. Later calls get their mask back in
/// `Err` so the caller can decide whether the mismatch matters.
pub fn install(mask: Mask) -> Result<&'static Mask, Mask> {
    SHARED.set(mask)?;
    Ok(SHARED.wait())
}

/// The process-wide mask, loading the embedded asset if nothing was
/// installed yet.
pub fn shared() -> Result<&'static Mask, ImageError> {
    if let Some(mask) = SHARED.get() {
        return Ok(mask);
    }
    let mask = Mask::load(&AssetLoader::default())?;
    Ok(SHARED.get_or_init(|| mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(width: u32, height: u32) -> Mask {
        Mask::from_alpha(GrayImage::from_fn(width, height, |x, _| Luma([(x * 10) as u8]))).unwrap()
    }

    #[test]
    fn test_empty_mask_rejected() {
        assert!(Mask::from_alpha(GrayImage::new(0, 5)).is_err());
    }

    #[test]
    fn test_resampled_height_keeps_aspect() {
        let m = mask(800, 160);
        assert_eq!(m.resampled_height(400), 80);
        assert_eq!(m.resampled_height(799), 159);
        assert_eq!(m.resampled_height(4), 0);
    }

    #[test]
    fn test_resample_dimensions() {
        let m = mask(20, 10).resample(7).unwrap();
        assert_eq!((m.width(), m.height()), (7, 3));
    }

    #[test]
    fn test_resample_to_nothing_is_invalid() {
        let err = mask(20, 10).resample(1).unwrap_err();
        assert!(matches!(err, ImageError::InvalidGeometry { width: 1, height: 0, .. }));
    }

    #[test]
    fn test_alpha_at_clamps() {
        let m = mask(3, 2);
        assert_eq!(m.alpha_at(99, 99), 20);
    }

    #[test]
    fn test_from_png_keeps_alpha_channel() {
        let loader = AssetLoader::default();
        let m = Mask::load(&loader).unwrap();
        assert!(m.width() > 0 && m.height() > 0);
        // Embedded mask cuts out the top edge and leaves the bottom alone
        assert_eq!(m.alpha_at(m.width() / 2, 0), 255);
        assert_eq!(m.alpha_at(0, m.height() - 1), 0);
    }

    #[test]
    fn test_corrupt_mask_png() {
        assert!(matches!(
            Mask::from_png_bytes(b"not a png"),
            Err(AssetError::Decode { .. })
        ));
    }

    #[test]
    fn test_shared_is_stable() {
        let a = shared().unwrap() as *const Mask;
        let b = shared().unwrap() as *const Mask;
        assert_eq!(a, b);
    }

    #[test]
    fn test_install_after_shared_hands_mask_back() {
        let installed = shared().unwrap();
        let rejected = install(mask(4, 2)).unwrap_err();
        assert_eq!((rejected.width(), rejected.height()), (4, 2));
        assert!(std::ptr::eq(shared().unwrap(), installed));
    }
}
