//! Raw RGBA pixel samples
//!
//! [`Rgba`] is the unit the aggregator works on. Its packed 32-bit form is
//! the identity used by frequency tables and ignore sets, so no string is
//! allocated per pixel.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// One straight-alpha RGBA sample with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a sample from its four channels.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque sample.
    ///
    /// # Example
    /// ```
    /// use color_tally::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Read a sample from a 4-byte `[r, g, b, a]` chunk.
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Color channels without alpha.
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `true` when alpha is zero. Such samples never contribute to a tally.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Pack into `0xRRGGBBAA`.
    ///
    /// Two samples share a key exactly when they share a canonical hex
    /// string, so the key can stand in for the hex form during a scan.
    #[inline]
    pub fn key(self) -> u32 {
        u32::from_be_bytes(self.to_bytes())
    }

    /// Inverse of [`key()`](Self::key).
    #[inline]
    pub fn from_key(key: u32) -> Self {
        Self::from_bytes(key.to_be_bytes())
    }

    /// Canonical lowercase hex form.
    ///
    /// `#rrggbb` for opaque samples, `#rrggbbaa` otherwise.
    ///
    /// # Example
    /// ```
    /// use color_tally::Rgba;
    /// assert_eq!(Rgba::opaque(47, 211, 242).to_hex(), "#2fd3f2");
    /// assert_eq!(Rgba::new(0, 0, 255, 128).to_hex(), "#0000ff80");
    /// ```
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a hex color.
    ///
    /// Accepts `#RGB`, `#RRGGBB` and `#RRGGBBAA`, with or without the leading
    /// `#`, in any letter case. Surrounding whitespace is trimmed. Forms
    /// without an alpha component parse as opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let mut digits = Vec::with_capacity(8);
        for c in s.chars() {
            let digit = c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c))?;
            digits.push(digit as u8);
        }
        let pair = |i: usize| digits[i] << 4 | digits[i + 1];

        match digits.len() {
            // Shorthand: each digit doubles (0xF -> 0xFF)
            3 => Ok(Self::opaque(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
            6 => Ok(Self::opaque(pair(0), pair(2), pair(4))),
            8 => Ok(Self::new(pair(0), pair(2), pair(4), pair(6))),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}
