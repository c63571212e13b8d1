//! Frequency aggregation over pixel buffers
//!
//! One linear pass per call: transparent samples are skipped, ignored colors
//! are skipped, everything else is counted by packed RGBA key. The result is
//! ranked by descending count.
//!
//! # Example
//!
//! ```
//! use color_tally::{aggregate, IgnoreSet, PixelBuffer, Rgba};
//!
//! let red = Rgba::opaque(255, 0, 0);
//! let blue = Rgba::opaque(0, 0, 255);
//! let clear = Rgba::new(0, 0, 0, 0);
//! let buffer = PixelBuffer::from_samples(&[red, red, blue, clear], 2, 2);
//!
//! let colors = aggregate(&buffer, &IgnoreSet::new());
//! let hex: Vec<&str> = colors.iter().map(|c| c.hex()).collect();
//! assert_eq!(hex, ["#ff0000", "#0000ff"]);
//! ```

mod frequency;
mod ignore;

pub use frequency::{ColorCount, FrequencyTable};
pub use ignore::IgnoreSet;

use crate::color::Color;
use crate::pixels::{samples, PixelBuffer};

/// Ranked colors of a buffer, with their counts.
pub fn tally(pixels: &PixelBuffer, ignore: &IgnoreSet) -> Vec<ColorCount> {
    tally_bytes(pixels.as_bytes(), ignore)
}

/// [`tally`] over raw stride-4 RGBA bytes.
pub fn tally_bytes(data: &[u8], ignore: &IgnoreSet) -> Vec<ColorCount> {
    let mut table = FrequencyTable::new(ignore);
    table.extend(samples(data));
    table.into_ranked()
}

/// Ranked colors of a buffer, most frequent first.
///
/// Returns an empty vector when nothing is countable.
pub fn aggregate(pixels: &PixelBuffer, ignore: &IgnoreSet) -> Vec<Color> {
    aggregate_bytes(pixels.as_bytes(), ignore)
}

/// [`aggregate`] over raw stride-4 RGBA bytes.
pub fn aggregate_bytes(data: &[u8], ignore: &IgnoreSet) -> Vec<Color> {
    tally_bytes(data, ignore)
        .into_iter()
        .map(|entry| entry.color)
        .collect()
}
