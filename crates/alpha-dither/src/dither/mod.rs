//! Error diffusion dithering.
//!
//! Each pixel is matched to its nearest palette entry and the quantization
//! error is pushed onto not-yet-visited neighbors according to a
//! [`Kernel`]. The scan is a single left-to-right, top-to-bottom pass.
//!
//! The base algorithms ([`FloydSteinberg`], [`Atkinson`], [`SierraLite`])
//! treat every pixel as visible. Wrapping one in [`PreserveTransparency`]
//! sends fully transparent pixels straight to the palette's transparent
//! index, so they neither absorb nor emit error.
//!
//! # Example
//!
//! ```
//! use alpha_dither::{Dither, FloydSteinberg, Palette, PreserveTransparency, Rgba};
//!
//! let palette = Palette::new(&[Rgba::TRANSPARENT, Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
//! let image = vec![Rgba::opaque(250, 250, 250), Rgba::TRANSPARENT];
//!
//! let indices = PreserveTransparency::new(FloydSteinberg::new())
//!     .dither(&image, 2, 1, &palette)
//!     .unwrap();
//! assert_eq!(indices, vec![2, 0]);
//! ```

mod atkinson;
mod floyd_steinberg;
mod kernel;
mod options;
mod preserve;
mod sierra;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use options::DitherOptions;
pub use preserve::PreserveTransparency;
pub use sierra::SierraLite;

use std::fmt;
use std::str::FromStr;

use crate::api::DitherError;
use crate::color::Rgba;
use crate::palette::Palette;

/// Dither algorithm selection for the builder API and configuration files.
///
/// Parses from kebab-case names:
///
/// ```
/// use alpha_dither::DitherAlgorithm;
///
/// let algorithm: DitherAlgorithm = "sierra-lite".parse().unwrap();
/// assert_eq!(algorithm, DitherAlgorithm::SierraLite);
/// assert_eq!(algorithm.to_string(), "sierra-lite");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg (100% propagation, 4 neighbors).
    #[default]
    FloydSteinberg,
    /// Atkinson (75% propagation). Higher contrast, less bleeding.
    Atkinson,
    /// Sierra Lite (100% propagation, 3 neighbors).
    SierraLite,
}

impl DitherAlgorithm {
    pub const ALL: [DitherAlgorithm; 3] = [
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Atkinson,
        DitherAlgorithm::SierraLite,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::Atkinson => "atkinson",
            DitherAlgorithm::SierraLite => "sierra-lite",
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`DitherAlgorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    pub name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown dither algorithm '{}' (expected floyd-steinberg, atkinson or sierra-lite)",
            self.name
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for DitherAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        DitherAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == normalized)
            .ok_or_else(|| ParseAlgorithmError { name: s.to_string() })
    }
}

/// Trait for dithering algorithms producing palette indices.
pub trait Dither {
    /// Dither `image` (row-major, `width * height` pixels) to indices into
    /// `palette`, one per pixel, in row-major order.
    fn dither(
        &self,
        image: &[Rgba],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, DitherError>;
}

/// A kernel-based error diffuser that decorators such as
/// [`PreserveTransparency`] can drive.
pub trait ErrorDiffusion {
    fn kernel(&self) -> &Kernel;
    fn options(&self) -> &DitherOptions;
}

/// Sliding window of error rows.
///
/// Only the rows the kernel can reach are stored (`max_dy + 1`), so memory
/// is proportional to the image width rather than its area.
#[derive(Debug)]
pub struct ErrorBuffer {
    /// rows[0] is the current row, rows[1] the next, etc.
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth.max(1)).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to a pixel `row_offset` rows below the current one.
    /// Out-of-bounds targets are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    pub fn advance_row(&mut self) {
        // [0,1,2] -> [1,2,0]
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

#[inline]
pub(crate) fn clamp_channel(value: f32, max_error: f32) -> f32 {
    value.clamp(-max_error, 255.0 + max_error)
}

/// Core error diffusion loop shared by every kernel.
///
/// `bypass` may claim a pixel before matching: a claimed pixel gets the
/// returned index, its accumulated error is dropped and it diffuses
/// nothing.
pub(crate) fn dither_with_kernel<F>(
    image: &[Rgba],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
    options: &DitherOptions,
    bypass: F,
) -> Result<Vec<u8>, DitherError>
where
    F: Fn(Rgba) -> Option<u8>,
{
    let expected = width * height;
    if image.len() != expected {
        return Err(DitherError::DimensionMismatch {
            expected,
            actual: image.len(),
        });
    }

    let mut output = vec![0u8; expected];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let source = image[idx];

            if let Some(index) = bypass(source) {
                output[idx] = index;
                continue;
            }

            let accumulated = error_buf.get_accumulated(x);
            let rgb = source.rgb();
            let pixel = [
                clamp_channel(rgb[0] + accumulated[0], options.error_clamp),
                clamp_channel(rgb[1] + accumulated[1], options.error_clamp),
                clamp_channel(rgb[2] + accumulated[2], options.error_clamp),
            ];

            let nearest = palette
                .find_nearest(pixel)
                .ok_or(DitherError::NoVisibleEntry)?;
            output[idx] = nearest as u8;

            let chosen = palette.get(nearest).rgb();
            let error = [
                pixel[0] - chosen[0],
                pixel[1] - chosen[1],
                pixel[2] - chosen[2],
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx < 0 || nx as usize >= width || y + dy as usize >= height {
                    continue;
                }
                let w = weight as f32 / divisor;
                error_buf.add_error(
                    nx as usize,
                    dy as usize,
                    [error[0] * w, error[1] * w, error[2] * w],
                );
            }
        }
        error_buf.advance_row();
    }

    Ok(output)
}
