//! Flat RGBA pixel buffer produced by a rasterizer.

use crate::color::Rgba;

/// Row-major, straight-alpha RGBA bytes with their dimensions.
///
/// # Example
///
/// ```
/// use color_tally::{PixelBuffer, Rgba};
///
/// let buffer = PixelBuffer::from_samples(
///     &[Rgba::opaque(255, 0, 0), Rgba::new(0, 0, 0, 0)],
///     2,
///     1,
/// );
/// assert_eq!(buffer.len(), 2);
/// assert_eq!(buffer.samples().filter(|s| !s.is_transparent()).count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    /// `width * height * 4` bytes.
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height * 4`.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * 4,
            "data length ({}) must match width * height * 4 ({}x{}x4)",
            data.len(),
            width,
            height,
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Build a buffer from samples.
    pub fn from_samples(samples: &[Rgba], width: u32, height: u32) -> Self {
        let data = samples.iter().flat_map(|s| s.to_bytes()).collect();
        Self::new(data, width, height)
    }

    /// A buffer with no pixels. `width` or `height` may be non-zero to
    /// record the degenerate target size that produced it.
    pub fn empty(width: u32, height: u32) -> Self {
        debug_assert!(width == 0 || height == 0);
        Self {
            data: Vec::new(),
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / 4
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.len() < 4
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate samples in row-major order.
    pub fn samples(&self) -> impl Iterator<Item = Rgba> + '_ {
        samples(&self.data)
    }
}

/// Iterate stride-4 samples over raw bytes. A trailing partial sample is
/// skipped.
pub(crate) fn samples(data: &[u8]) -> impl Iterator<Item = Rgba> + '_ {
    data.chunks_exact(4)
        .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples_is_row_major() {
        let samples = [
            Rgba::opaque(1, 0, 0),
            Rgba::opaque(2, 0, 0),
            Rgba::opaque(3, 0, 0),
            Rgba::opaque(4, 0, 0),
        ];
        let buffer = PixelBuffer::from_samples(&samples, 2, 2);

        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.as_bytes().len(), 16);
        assert_eq!(buffer.samples().collect::<Vec<_>>(), samples.to_vec());
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PixelBuffer::empty(0, 3);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.samples().count(), 0);
    }

    #[test]
    fn test_trailing_partial_sample_is_skipped() {
        let data = [255, 0, 0, 255, 9, 9];
        let collected: Vec<_> = samples(&data).collect();
        assert_eq!(collected, vec![Rgba::opaque(255, 0, 0)]);
    }
}
