//! Dithering options.

/// Configuration options for error diffusion dithering.
///
/// # Example
///
/// ```
/// use alpha_dither::DitherOptions;
///
/// let options = DitherOptions::new().error_clamp(32.0);
/// assert_eq!(options.error_clamp, 32.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitherOptions {
    /// How far a channel may overshoot `0..=255` once accumulated error
    /// is added, in 8-bit units.
    ///
    /// Values are clamped to `[-error_clamp, 255 + error_clamp]` before
    /// matching. Zero gives plain saturating diffusion; larger values let
    /// error travel further through saturated regions.
    ///
    /// Default: `64.0`
    pub error_clamp: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self { error_clamp: 64.0 }
    }
}

impl DitherOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overshoot clamp. Negative and non-finite values become 0.
    #[inline]
    pub fn error_clamp(mut self, clamp: f32) -> Self {
        self.error_clamp = if clamp.is_finite() { clamp.max(0.0) } else { 0.0 };
        self
    }
}
