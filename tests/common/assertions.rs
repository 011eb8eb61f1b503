//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use quick_image::{Encoded, Raster};

/// Assert output is a PNG with the right content type and decode it.
pub fn assert_png(encoded: &Encoded) -> image::RgbaImage {
    assert_eq!(encoded.content_type, "image/png", "Expected Content-Type: image/png");
    assert!(
        encoded.bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        encoded.bytes.len(),
        &encoded.bytes[..8.min(encoded.bytes.len())]
    );
    image::load_from_memory_with_format(&encoded.bytes, image::ImageFormat::Png)
        .expect("PNG should decode")
        .to_rgba8()
}

/// A decoded single-frame GIF in indexed form.
#[derive(Debug)]
pub struct DecodedGif {
    pub width: u16,
    pub height: u16,
    pub global_palette: Vec<u8>,
    pub transparent: Option<u8>,
    pub delay: u16,
    pub indices: Vec<u8>,
    pub frame_count: usize,
    pub repeat: gif::Repeat,
}

pub fn decode_gif(bytes: &[u8]) -> DecodedGif {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(bytes).expect("GIF header should decode");
    let global_palette = decoder
        .global_palette()
        .expect("GIF should carry a global palette")
        .to_vec();

    let first = decoder
        .read_next_frame()
        .expect("GIF frame should decode")
        .expect("GIF should have a frame")
        .clone();
    let mut frame_count = 1;
    while decoder
        .read_next_frame()
        .expect("GIF should decode to the end")
        .is_some()
    {
        frame_count += 1;
    }

    DecodedGif {
        width: first.width,
        height: first.height,
        global_palette,
        transparent: first.transparent,
        delay: first.delay,
        indices: first.buffer.into_owned(),
        frame_count,
        repeat: decoder.repeat(),
    }
}

/// Assert output is a GIF with the right content type and decode it.
pub fn assert_gif(encoded: &Encoded) -> DecodedGif {
    assert_eq!(encoded.content_type, "image/gif", "Expected Content-Type: image/gif");
    assert!(
        encoded.bytes.starts_with(b"GIF89a"),
        "Expected GIF89a, got {:?}",
        &encoded.bytes[..6.min(encoded.bytes.len())]
    );
    decode_gif(&encoded.bytes)
}

/// Assert that exactly the fully transparent raster pixels map to the
/// GIF's transparent index 0.
pub fn assert_transparency_roundtrip(raster: &Raster, gif: &DecodedGif) {
    assert_eq!(gif.transparent, Some(0), "GIF transparent index");
    assert_eq!(
        (gif.width as u32, gif.height as u32),
        raster.dimensions(),
        "GIF dimensions"
    );
    for (i, (px, &idx)) in raster.pixels().zip(&gif.indices).enumerate() {
        let (x, y) = (i as u32 % raster.width(), i as u32 / raster.width());
        assert_eq!(
            px[3] == 0,
            idx == 0,
            "pixel ({x}, {y}) alpha {} mapped to index {idx}",
            px[3]
        );
    }
}
