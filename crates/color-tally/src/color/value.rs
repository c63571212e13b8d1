//! The extracted color value
//!
//! A [`Color`] carries every representation callers ask for, computed once
//! when the color is first seen during a scan.

use std::fmt;

use super::hsl::Hsl;
use super::rgba::Rgba;

/// A distinct color found in an image.
///
/// `hex`, `rgb` and `hsl` all describe the same sample. Equality and
/// hashing follow the underlying RGBA value, which is equivalent to
/// comparing the canonical hex strings.
#[derive(Debug, Clone)]
pub struct Color {
    rgba: Rgba,
    hex: String,
    hsl: Hsl,
}

impl Color {
    /// Build a color from a sample, deriving hex and HSL.
    pub fn from_rgba(rgba: Rgba) -> Self {
        Self {
            rgba,
            hex: rgba.to_hex(),
            hsl: Hsl::from_rgb(rgba.r, rgba.g, rgba.b),
        }
    }

    /// Canonical hex form (`#rrggbb` or `#rrggbbaa`).
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// `[r, g, b]`, each in `0..=255`.
    #[inline]
    pub fn rgb(&self) -> [u8; 3] {
        self.rgba.rgb()
    }

    #[inline]
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.rgba.a
    }

    #[inline]
    pub fn rgba(&self) -> Rgba {
        self.rgba
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self::from_rgba(rgba)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba
    }
}

impl Eq for Color {}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rgba.hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
