//! HSL representation on a 0..=100 integer scale
//!
//! All three components (hue included) are expressed as rounded
//! percentages, so a hue of 100 is the same angle as a hue of 0.

/// Hue, saturation and lightness, each rounded into `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    /// Hue as a fraction of the full turn (0..=100)
    pub h: u8,
    /// Saturation (0..=100)
    pub s: u8,
    /// Lightness (0..=100)
    pub l: u8,
}

impl Hsl {
    #[inline]
    pub fn new(h: u8, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Convert 8-bit sRGB channels to HSL.
    ///
    /// When two channels tie for the maximum, hue is taken from the first
    /// of red, green, blue that holds it.
    ///
    /// # Example
    /// ```
    /// use color_tally::Hsl;
    /// assert_eq!(Hsl::from_rgb(255, 0, 0), Hsl::new(0, 100, 50));
    /// assert_eq!(Hsl::from_rgb(255, 255, 255), Hsl::new(0, 0, 100));
    /// ```
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            // achromatic
            return Self::new(0, 0, to_percent(lightness));
        }

        let deviation = max - min;
        let saturation = if lightness > 0.5 {
            deviation / (2.0 - max - min)
        } else {
            deviation / (max + min)
        };

        let sector = if max == r {
            let wrap = if g < b { 6.0 } else { 0.0 };
            (g - b) / deviation + wrap
        } else if max == g {
            (b - r) / deviation + 2.0
        } else {
            (r - g) / deviation + 4.0
        };
        let hue = sector / 6.0;

        Self::new(
            to_percent(hue),
            to_percent(saturation),
            to_percent(lightness),
        )
    }

    /// Components as `[h, s, l]`.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.h, self.s, self.l]
    }
}

/// Scale a unit value to a percentage, rounding halves up.
#[inline]
fn to_percent(value: f64) -> u8 {
    (value * 100.0 + 0.5).floor().clamp(0.0, 100.0) as u8
}
