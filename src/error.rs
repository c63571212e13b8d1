use color_tally::ParseColorError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),

    #[error("Invalid ignore color '{input}': {source}")]
    InvalidColor {
        input: String,
        #[source]
        source: ParseColorError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

impl ExtractError {
    /// `true` when the image itself could not be read or interpreted.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, ExtractError::Raster(e) if e.is_decode_failure())
    }
}

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported image format")]
    UnsupportedFormat,

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("Unsupported PNG layout: {0}")]
    PngLayout(String),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate {width}x{height} pixmap")]
    PixmapAllocation { width: u32, height: u32 },
}

impl RasterError {
    /// Decode failures are about the input; allocation failures are about
    /// the requested target size.
    pub fn is_decode_failure(&self) -> bool {
        !matches!(self, RasterError::PixmapAllocation { .. })
    }
}

impl From<png::DecodingError> for RasterError {
    fn from(e: png::DecodingError) -> Self {
        RasterError::PngDecode(e.to_string())
    }
}
