//! PNG and GIF encoding.

use std::borrow::Cow;
use std::io::Cursor;

use alpha_dither::Rgba;

use super::Raster;
use crate::error::ImageError;
use crate::models::GifOptions;

/// Encode an RGBA raster as an 8-bit RGBA PNG.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, ImageError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, raster.width(), raster.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::Encode(format!("PNG header: {e}")))?;
        writer
            .write_image_data(raster.as_raw())
            .map_err(|e| ImageError::Encode(format!("PNG data: {e}")))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress a PNG with oxipng. Falls back to the input if optimization
/// fails.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) if optimized.len() < png_bytes.len() => optimized,
        Ok(_) => png_bytes,
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping original");
            png_bytes
        }
    }
}

/// Reduce a raster to a single-frame GIF with index 0 transparent.
///
/// Fully transparent pixels end up on index 0 and nothing else does.
/// The frame has no delay and the file carries no looping extension.
pub fn encode_gif(raster: &Raster, options: &GifOptions) -> Result<Vec<u8>, ImageError> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 || width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(ImageError::InvalidGeometry {
            width,
            height,
            reason: "GIF dimensions must be within 1..=65535",
        });
    }

    let pixels = Rgba::from_rgba_bytes(raster.as_raw());
    let indexed = options
        .ditherer()
        .dither(&pixels, width as usize, height as usize)
        .map_err(|e| ImageError::Encode(format!("GIF palette reduction: {e}")))?;

    let color_table = indexed.palette().to_rgb_table();
    let transparent = indexed.transparent_index();
    let palette_len = indexed.palette().len();
    let (indices, _) = indexed.into_parts();

    let frame = gif::Frame {
        width: width as u16,
        height: height as u16,
        buffer: Cow::Owned(indices),
        transparent,
        delay: 0,
        ..gif::Frame::default()
    };

    let mut out = Vec::new();
    {
        let mut encoder = gif::Encoder::new(&mut out, width as u16, height as u16, &color_table)
            .map_err(|e| ImageError::Encode(format!("GIF header: {e}")))?;
        encoder
            .write_frame(&frame)
            .map_err(|e| ImageError::Encode(format!("GIF frame: {e}")))?;
    }

    tracing::debug!(
        width,
        height,
        colors = palette_len,
        dither = %options.dither,
        bytes = out.len(),
        "Encoded GIF"
    );
    Ok(out)
}
