use image::imageops::FilterType;

use super::encode::encode_png;
use super::Raster;
use crate::error::ImageError;

pub const THUMBNAIL_WIDTH: u32 = 480;
pub const THUMBNAIL_HEIGHT: u32 = 270;

/// Resize to exactly 480x270 (stretching if the aspect differs) with
/// Lanczos3 and encode as PNG.
pub fn thumbnail(raster: &Raster) -> Result<Vec<u8>, ImageError> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidGeometry {
            width,
            height,
            reason: "empty raster",
        });
    }

    let resized = image::imageops::resize(
        raster,
        THUMBNAIL_WIDTH,
        THUMBNAIL_HEIGHT,
        FilterType::Lanczos3,
    );
    let png = encode_png(&resized)?;
    tracing::debug!(width, height, bytes = png.len(), "Rendered thumbnail");
    Ok(png)
}
