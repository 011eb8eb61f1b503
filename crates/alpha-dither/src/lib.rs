#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! alpha-dither: palette reduction for images with hard alpha cutouts
//!
//! Indexed formats such as GIF have no partial alpha: a pixel is either a
//! palette color or the one transparent index. This crate quantizes an RGBA
//! image to at most 256 colors with index 0 reserved for full transparency,
//! then error-diffuses the visible pixels while keeping every fully
//! transparent pixel on index 0.
//!
//! # Quick Start
//!
//! ```
//! use alpha_dither::{GifDitherer, Rgba};
//!
//! let pixels = vec![Rgba::opaque(128, 128, 128), Rgba::TRANSPARENT, Rgba::opaque(10, 200, 30), Rgba::TRANSPARENT];
//! let image = GifDitherer::new().dither(&pixels, 2, 2).unwrap();
//!
//! assert_eq!(image.palette().get(0), Rgba::TRANSPARENT);
//! assert_eq!(image.indices()[1], 0);
//! assert_eq!(image.indices()[3], 0);
//! ```
//!
//! # Composition
//!
//! The building blocks compose without the builder:
//!
//! - [`MedianCut`] picks representative colors from visible pixels.
//! - [`TransparentSlot`] wraps any [`Quantize`] and forces index 0 to
//!   `(0, 0, 0, 0)`.
//! - [`FloydSteinberg`], [`Atkinson`] and [`SierraLite`] diffuse error with
//!   their kernels; [`PreserveTransparency`] wraps any of them so that
//!   transparent pixels bypass diffusion.
//!
//! ```
//! use alpha_dither::{quantize, Dither, FloydSteinberg, PreserveTransparency, Rgba};
//!
//! let pixels = vec![Rgba::opaque(0, 0, 0), Rgba::TRANSPARENT];
//! let palette = quantize(&pixels);
//! let indices = PreserveTransparency::new(FloydSteinberg::new())
//!     .dither(&pixels, 2, 1, &palette)
//!     .unwrap();
//!
//! // Opaque black never lands on the transparent slot
//! assert_eq!(indices, vec![1, 0]);
//! ```
//!
//! # Color Matching
//!
//! Matching and diffusion both use squared Euclidean distance on 8-bit
//! sRGB values. Transparent palette entries are never candidates for a
//! visible pixel, so black pixels stay black even though the transparent
//! slot is `(0, 0, 0, 0)`.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod quantize;


pub use api::{DitherError, GifDitherer};
pub use color::Rgba;
pub use dither::{
    Atkinson, Dither, DitherAlgorithm, DitherOptions, ErrorDiffusion, FloydSteinberg,
    ParseAlgorithmError, PreserveTransparency, SierraLite,
};
pub use output::IndexedImage;
pub use palette::{Palette, PaletteError, MAX_PALETTE_LEN};
pub use quantize::{quantize, quantize_with, MedianCut, Quantize, TransparentSlot};
