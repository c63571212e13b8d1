pub mod decode;
pub mod rasterize;
pub mod source;

pub use decode::DecodedImage;
pub use rasterize::{render, target_size, Rasterizer, ScaleCheck};
pub use source::{ImageFormat, ImageSource};
