//! color-tally: frequency-ranked color extraction from RGBA pixels
//!
//! This crate holds the counting half of dominant-color extraction. It knows
//! nothing about image files: a rasterizer hands it a [`PixelBuffer`] and it
//! returns the distinct colors, most frequent first.
//!
//! # Quick Start
//!
//! ```
//! use color_tally::{aggregate, IgnoreSet, PixelBuffer, Rgba};
//!
//! let teal = Rgba::opaque(0, 128, 128);
//! let white = Rgba::opaque(255, 255, 255);
//! let buffer = PixelBuffer::from_samples(&[teal, white, white, teal, teal, white], 3, 2);
//!
//! // White is ignored by the usual background filter
//! let colors = aggregate(&buffer, &IgnoreSet::black_and_white());
//! assert_eq!(colors.len(), 1);
//! assert_eq!(colors[0].hex(), "#008080");
//! assert_eq!(colors[0].rgb(), [0, 128, 128]);
//! assert_eq!(colors[0].hsl().to_array(), [50, 100, 25]);
//! ```
//!
//! # Counting Rules
//!
//! - Samples with alpha 0 contribute nothing.
//! - Color identity is the full RGBA value. An opaque color has the hex form
//!   `#rrggbb`; any other alpha appends two more digits (`#rrggbbaa`), so a
//!   translucent pixel is a different color from its opaque counterpart.
//! - Colors in the [`IgnoreSet`] are neither counted nor returned.
//! - Results are sorted by descending count. Equal counts currently come out
//!   in first-seen order; that order is not part of the contract.
//!
//! # Representations
//!
//! Every returned [`Color`] carries its hex string, `[r, g, b]` triple and
//! [`Hsl`] triple. HSL components are all percentages in `0..=100`,
//! including hue. Both are computed once per distinct color, not per pixel.

pub mod color;
pub mod pixels;
pub mod tally;


pub use color::{Color, Hsl, ParseColorError, Rgba};
pub use pixels::PixelBuffer;
pub use tally::{
    aggregate, aggregate_bytes, tally, tally_bytes, ColorCount, FrequencyTable, IgnoreSet,
};
