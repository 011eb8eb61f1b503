//! Color types
//!
//! Pixels are handled as straight (non-premultiplied) 8-bit RGBA. Error
//! diffusion arithmetic happens on `[f32; 3]` RGB triples in the same
//! 0..=255 scale; alpha never takes part in diffusion.
//!
//! # Example
//!
//! ```
//! use alpha_dither::Rgba;
//!
//! let px = Rgba::from_u8(200, 100, 50, 255);
//! assert!(px.is_opaque());
//! assert!(Rgba::TRANSPARENT.is_transparent());
//! ```

mod rgba;

pub use rgba::Rgba;
