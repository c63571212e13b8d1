//! Dominant colors - rank the colors of an image by frequency
//!
//! Images (PNG or SVG, detected from content) are rasterized at a reduced
//! scale, then every non-transparent pixel is counted by exact RGBA value.
//! Colors come back most frequent first, each as hex, RGB and HSL.
//!
//! ```no_run
//! use dominant_colors::{extract_colors, ExtractOptions};
//!
//! let colors = extract_colors(std::path::Path::new("banner.png"), &ExtractOptions::default())?;
//! if let Some(top) = colors.first() {
//!     println!("{} {:?} {:?}", top.hex(), top.rgb(), top.hsl());
//! }
//! # Ok::<(), dominant_colors::error::ExtractError>(())
//! ```
//!
//! Pixel counting lives in the `color-tally` crate; this crate adds decoding,
//! scaling, configuration and batch processing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use color_tally::{Color, ColorCount, Hsl, IgnoreSet, PixelBuffer, Rgba};
pub use error::{ExtractError, RasterError};
pub use models::{AppConfig, ExtractOptions};
pub use rendering::{ImageSource, Rasterizer};
pub use services::{extract_colors, BatchReport, BatchRunner, ColorExtractor};
