use image::{Rgba, RgbaImage};

use super::Raster;
use crate::error::ImageError;
use crate::models::SourceFormat;

/// Decode `bytes` declared as `mime` into an owned RGBA raster.
///
/// Unsupported MIME types are rejected before any decoding happens.
pub fn normalize(bytes: &[u8], mime: &str) -> Result<Raster, ImageError> {
    let format = SourceFormat::from_mime(mime)?;
    decode(bytes, format)
}

/// Decode `bytes` as `format` and draw the result over a fresh
/// transparent-black canvas of the same size.
pub fn decode(bytes: &[u8], format: SourceFormat) -> Result<Raster, ImageError> {
    let decoded = image::load_from_memory_with_format(bytes, format.image_format())
        .map_err(|source| ImageError::Decode { format, source })?;

    // 16-bit and gray sources are narrowed here; the canvas step below
    // then fixes the channel model regardless of what the decoder produced.
    let source = decoded.to_rgba8();
    let mut canvas = RgbaImage::new(source.width(), source.height());
    draw_over(&mut canvas, &source);

    tracing::debug!(
        %format,
        width = canvas.width(),
        height = canvas.height(),
        "Normalized image"
    );
    Ok(canvas)
}

/// Composite `src` over `dst` in place (straight-alpha Porter-Duff "over"),
/// anchored at the origin. Pixels outside the overlap are left untouched.
///
/// Over a transparent-black `dst` this reproduces visible source pixels
/// exactly and turns every fully transparent source pixel into
/// `(0, 0, 0, 0)`.
pub fn draw_over(dst: &mut RgbaImage, src: &RgbaImage) {
    let width = dst.width().min(src.width());
    let height = dst.height().min(src.height());
    for y in 0..height {
        for x in 0..width {
            let s = *src.get_pixel(x, y);
            let d = dst.get_pixel_mut(x, y);
            *d = over(s, *d);
        }
    }
}

fn over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = dst[3] as u32;

    // Alpha scaled by 255
    let out_a = sa * 255 + da * (255 - sa);
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let num = src[c] as u32 * sa * 255 + dst[c] as u32 * da * (255 - sa);
        out[c] = ((num + out_a / 2) / out_a).min(255) as u8;
    }
    out[3] = ((out_a + 127) / 255).min(255) as u8;
    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageEncoder;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(img.as_raw(), img.width(), img.height(), image::ExtendedColorType::Rgba8)
            .unwrap();
        out
    }

    #[test]
    fn test_over_transparent_black_is_identity_for_visible() {
        let base = Rgba([0, 0, 0, 0]);
        for px in [Rgba([10, 20, 30, 255]), Rgba([200, 100, 50, 128]), Rgba([1, 2, 3, 1])] {
            assert_eq!(over(px, base), px);
        }
    }

    #[test]
    fn test_over_canonicalizes_invisible_pixels() {
        assert_eq!(over(Rgba([90, 80, 70, 0]), Rgba([0, 0, 0, 0])), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_over_blends_onto_opaque() {
        let out = over(Rgba([255, 255, 255, 128]), Rgba([0, 0, 0, 255]));
        assert_eq!(out[3], 255);
        assert!((127..=129).contains(&out[0]));
    }

    #[test]
    fn test_draw_over_clips_to_overlap() {
        let mut dst = RgbaImage::new(2, 2);
        let src = RgbaImage::from_pixel(3, 1, Rgba([9, 9, 9, 255]));
        draw_over(&mut dst, &src);
        assert_eq!(*dst.get_pixel(1, 0), Rgba([9, 9, 9, 255]));
        assert_eq!(*dst.get_pixel(0, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_normalize_png_keeps_pixels() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 100]));
        img.put_pixel(2, 1, Rgba([50, 60, 70, 0]));
        let raster = normalize(&png_bytes(&img), "image/png").unwrap();
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(*raster.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*raster.get_pixel(1, 0), Rgba([0, 255, 0, 100]));
        assert_eq!(*raster.get_pixel(2, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_normalize_rejects_mime_before_decoding() {
        let err = normalize(b"GIF89a", "image/gif").unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_normalize_corrupt_png() {
        let err = normalize(b"\x89PNG\r\n\x1a\ngarbage", "image/png").unwrap_err();
        assert!(matches!(err, ImageError::Decode { format: SourceFormat::Png, .. }));
    }

    #[test]
    fn test_normalize_png_bytes_declared_as_jpeg() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        let err = normalize(&png_bytes(&img), "image/jpeg").unwrap_err();
        assert!(matches!(err, ImageError::Decode { format: SourceFormat::Jpeg, .. }));
    }
}
