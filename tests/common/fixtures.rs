//! Test fixtures: in-memory JPEG/PNG uploads.

use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};

pub mod mimes {
    pub const JPEG: &str = "image/jpeg";
    pub const PNG: &str = "image/png";
}

/// Smooth RGB gradient, useful for exercising dithering.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8,
            (y * 255 / height.max(2).saturating_sub(1)).min(255) as u8,
            128,
        ])
    })
}

/// Opaque gradient with a fully transparent checker pattern punched in.
pub fn checker_rgba(width: u32, height: u32, cell: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([(x * 3 % 256) as u8, (y * 5 % 256) as u8, 200, 255])
        }
    })
}

pub fn solid_rgba(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

pub fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .expect("PNG encoding should succeed");
    out
}

pub fn jpeg_bytes(img: &RgbImage) -> Vec<u8> {
    let mut out = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, 90)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .expect("JPEG encoding should succeed");
    out
}

/// A PNG upload of the given gradient.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let rgb = gradient_rgb(width, height);
    let rgba = RgbaImage::from_fn(width, height, |x, y| {
        let p = rgb.get_pixel(x, y);
        Rgba([p[0], p[1], p[2], 255])
    });
    png_bytes(&rgba)
}

/// A JPEG upload of the given gradient.
pub fn gradient_jpeg(width: u32, height: u32) -> Vec<u8> {
    jpeg_bytes(&gradient_rgb(width, height))
}
