use super::mask::Mask;
use super::normalize::normalize;
use super::Raster;
use crate::error::ImageError;

/// Cut the mask out of the top of `raster`.
///
/// The mask is resampled to the raster's width. For every row the mask
/// covers (`min(height, mask_height)`), each pixel keeps its RGB and gets
/// alpha `255 - mask_alpha`: opaque mask areas become transparent holes.
/// Rows below the mask are left as they are.
pub fn composite(raster: &Raster, mask: &Mask) -> Result<Raster, ImageError> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidGeometry {
            width,
            height,
            reason: "empty raster",
        });
    }

    let mut out = raster.clone();
    let mask_height = mask.resampled_height(width);
    if mask_height == 0 {
        tracing::debug!(width, "Mask collapses at this width, leaving raster unchanged");
        return Ok(out);
    }

    let resized = mask.resample(width)?;
    let rows = height.min(resized.height());
    for y in 0..rows {
        for x in 0..width {
            let pixel = out.get_pixel_mut(x, y);
            pixel[3] = 255 - resized.alpha_at(x, y);
        }
    }

    tracing::debug!(width, height, mask_rows = rows, "Composited bubble mask");
    Ok(out)
}

/// Decode `bytes` and cut the bubble mask out of it.
pub fn bubble(bytes: &[u8], mime: &str, mask: &Mask) -> Result<Raster, ImageError> {
    let raster = normalize(bytes, mime)?;
    composite(&raster, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba};

    /// 4x2 mask: opaque top row, transparent bottom row.
    fn top_row_mask() -> Mask {
        Mask::from_alpha(GrayImage::from_fn(4, 2, |_, y| Luma([if y == 0 { 255 } else { 0 }])))
            .unwrap()
    }

    #[test]
    fn test_same_size_inverts_alpha() {
        let raster = Raster::from_pixel(4, 2, Rgba([10, 20, 30, 255]));
        let out = composite(&raster, &top_row_mask()).unwrap();
        for x in 0..4 {
            assert_eq!(*out.get_pixel(x, 0), Rgba([10, 20, 30, 0]));
            assert_eq!(*out.get_pixel(x, 1), Rgba([10, 20, 30, 255]));
        }
    }

    #[test]
    fn test_rows_below_mask_untouched() {
        let raster = Raster::from_pixel(4, 6, Rgba([1, 2, 3, 77]));
        let out = composite(&raster, &top_row_mask()).unwrap();
        // Mask resamples to 4x2, rows 2.. keep the source alpha
        for y in 2..6 {
            assert_eq!(*out.get_pixel(0, y), Rgba([1, 2, 3, 77]));
        }
        assert_eq!(out.get_pixel(0, 1)[3], 255);
    }

    #[test]
    fn test_short_raster_clamps_rows() {
        let mask = Mask::from_alpha(GrayImage::from_pixel(4, 4, Luma([255]))).unwrap();
        let raster = Raster::from_pixel(4, 2, Rgba([5, 5, 5, 255]));
        let out = composite(&raster, &mask).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
        assert!(out.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_narrow_raster_left_unchanged() {
        let mask = Mask::from_alpha(GrayImage::from_pixel(100, 10, Luma([255]))).unwrap();
        let raster = Raster::from_pixel(5, 5, Rgba([9, 9, 9, 200]));
        assert_eq!(composite(&raster, &mask).unwrap(), raster);
    }

    #[test]
    fn test_empty_raster_rejected() {
        let err = composite(&Raster::new(0, 0), &top_row_mask()).unwrap_err();
        assert!(matches!(err, ImageError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_rgb_preserved_everywhere() {
        let raster = Raster::from_fn(8, 8, |x, y| Rgba([x as u8 * 30, y as u8 * 30, 7, 255]));
        let out = composite(&raster, &top_row_mask()).unwrap();
        for (a, b) in raster.pixels().zip(out.pixels()) {
            assert_eq!(a.0[..3], b.0[..3]);
        }
    }
}
