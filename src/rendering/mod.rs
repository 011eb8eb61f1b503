//! Raster operations: decoding, mask compositing, resizing and encoding.

pub mod bubble;
pub mod encode;
pub mod mask;
pub mod normalize;
pub mod thumbnail;

pub use bubble::{bubble, composite};
pub use encode::{encode_gif, encode_png, optimize_png};
pub use mask::Mask;
pub use normalize::{draw_over, normalize};
pub use thumbnail::{thumbnail, THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};

/// Owned, writable 8-bit straight-alpha RGBA raster.
pub type Raster = image::RgbaImage;
