//! Color types and conversions
//!
//! - [`Rgba`]: a raw pixel sample, also the packed aggregation key
//! - [`Hsl`]: hue/saturation/lightness on a 0..=100 scale
//! - [`Color`]: the value handed back to callers, with hex, RGB and HSL
//!
//! # Example
//!
//! ```
//! use color_tally::{Color, Rgba};
//!
//! let color = Color::from_rgba(Rgba::opaque(47, 211, 242));
//! assert_eq!(color.hex(), "#2fd3f2");
//! assert_eq!(color.hsl().to_array(), [53, 88, 57]);
//! ```

mod error;
mod hsl;
mod rgba;
mod value;

pub use error::ParseColorError;
pub use hsl::Hsl;
pub use rgba::Rgba;
pub use value::Color;
