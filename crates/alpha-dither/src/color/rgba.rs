//! Straight-alpha RGBA color type

/// An 8-bit RGBA color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the color reserved for the transparent
    /// palette slot.
    pub const TRANSPARENT: Rgba = Rgba::from_u8(0, 0, 0, 0);

    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::from_u8(r, g, b, 255)
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// RGB channels as floats in the 0..=255 scale used for error diffusion.
    #[inline]
    pub fn rgb(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// True when alpha is exactly zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Convert a packed RGBA8 buffer into pixels.
    ///
    /// Trailing bytes that do not form a whole pixel are ignored.
    pub fn from_rgba_bytes(data: &[u8]) -> Vec<Rgba> {
        data.chunks_exact(4)
            .map(|px| Rgba::from_u8(px[0], px[1], px[2], px[3]))
            .collect()
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Rgba::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_bytes()
    }
}
