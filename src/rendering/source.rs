use crate::error::RasterError;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Where an image comes from: a file on disk or bytes already in memory.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Load the raw bytes. In-memory sources are borrowed, not copied.
    pub fn read(&self) -> Result<Cow<'_, [u8]>, RasterError> {
        match self {
            ImageSource::Path(path) => std::fs::read(path)
                .map(Cow::Owned)
                .map_err(|source| RasterError::Read {
                    path: path.clone(),
                    source,
                }),
            ImageSource::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
        }
    }

    /// Short label for log lines.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageSource {
    fn from(bytes: &[u8]) -> Self {
        ImageSource::Bytes(bytes.to_vec())
    }
}

/// Image formats the rasterizer can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// How far into a text document to look for the `<svg` tag. Covers an XML
/// declaration, a doctype and a few comments.
const SVG_SNIFF_LEN: usize = 4096;

impl ImageFormat {
    /// Detect the format from file content. File names are not consulted.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(&PNG_SIGNATURE) {
            return Some(ImageFormat::Png);
        }

        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        let head = &data[..data.len().min(SVG_SNIFF_LEN)];
        let first = head.iter().position(|b| !b.is_ascii_whitespace())?;
        if head[first] == b'<' && head.windows(4).any(|w| w == b"<svg") {
            return Some(ImageFormat::Svg);
        }

        None
    }
}

/// Sniff `data`, failing with [`RasterError::UnsupportedFormat`].
pub fn detect_format(data: &[u8]) -> Result<ImageFormat, RasterError> {
    ImageFormat::sniff(data).ok_or(RasterError::UnsupportedFormat)
}
