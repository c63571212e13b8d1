//! Pixel buffers handed from a rasterizer to the aggregator.

mod buffer;

pub use buffer::PixelBuffer;
pub(crate) use buffer::samples;
