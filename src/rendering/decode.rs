use crate::error::RasterError;
use crate::rendering::source::{detect_format, ImageFormat};
use resvg::usvg;
use std::io::Cursor;
use color_tally::PixelBuffer;
use std::sync::Arc;

/// An image decoded to its native size, ready to be drawn at any scale.
pub enum DecodedImage {
    /// Straight-alpha RGBA pixels at native resolution, exactly as stored
    Raster(PixelBuffer),
    /// Parsed vector tree; rendered directly at the target size
    Vector(usvg::Tree),
}

impl DecodedImage {
    /// Decode `data`, detecting the format from its content.
    ///
    /// `fontdb` is only consulted for SVG text.
    pub fn decode(
        data: &[u8],
        fontdb: impl FnOnce() -> Arc<fontdb::Database>,
    ) -> Result<Self, RasterError> {
        match detect_format(data)? {
            ImageFormat::Png => decode_png(data).map(DecodedImage::Raster),
            ImageFormat::Svg => decode_svg(data, fontdb()).map(DecodedImage::Vector),
        }
    }

    pub fn format(&self) -> ImageFormat {
        match self {
            DecodedImage::Raster(_) => ImageFormat::Png,
            DecodedImage::Vector(_) => ImageFormat::Svg,
        }
    }

    /// Native width in pixels. SVG sizes are truncated to whole pixels.
    pub fn width(&self) -> u32 {
        match self {
            DecodedImage::Raster(pixels) => pixels.width(),
            DecodedImage::Vector(tree) => tree.size().width() as u32,
        }
    }

    /// Native height in pixels. SVG sizes are truncated to whole pixels.
    pub fn height(&self) -> u32 {
        match self {
            DecodedImage::Raster(pixels) => pixels.height(),
            DecodedImage::Vector(tree) => tree.size().height() as u32,
        }
    }
}

/// Decode a PNG of any color type and bit depth into straight RGBA.
fn decode_png(data: &[u8]) -> Result<PixelBuffer, RasterError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(RasterError::PngLayout(format!(
            "bit depth {:?} after normalization",
            info.bit_depth
        )));
    }

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(RasterError::PngLayout(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    let expected = info.width as usize * info.height as usize * 4;
    if rgba.len() != expected {
        return Err(RasterError::PngLayout(format!(
            "{} bytes of pixel data for {}x{}",
            rgba.len(),
            info.width,
            info.height
        )));
    }

    Ok(PixelBuffer::new(rgba, info.width, info.height))
}

fn decode_svg(data: &[u8], fontdb: Arc<fontdb::Database>) -> Result<usvg::Tree, RasterError> {
    let options = usvg::Options {
        fontdb,
        ..Default::default()
    };
    usvg::Tree::from_data(data, &options).map_err(|e| RasterError::SvgParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_fontdb() -> Arc<fontdb::Database> {
        Arc::new(fontdb::Database::new())
    }

    fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    fn raster_samples(image: DecodedImage) -> Vec<[u8; 4]> {
        let DecodedImage::Raster(pixels) = image else {
            panic!("Expected raster image");
        };
        pixels.samples().map(|s| s.to_bytes()).collect()
    }

    #[test]
    fn test_decode_rgba_png() {
        let data = [255, 0, 0, 255, 0, 0, 255, 255, 0, 0, 0, 0, 10, 20, 30, 255];
        let png = encode_png(2, 2, png::ColorType::Rgba, &data);

        let image = DecodedImage::decode(&png, empty_fontdb).unwrap();
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!((image.width(), image.height()), (2, 2));

        assert_eq!(
            raster_samples(image),
            vec![[255, 0, 0, 255], [0, 0, 255, 255], [0, 0, 0, 0], [10, 20, 30, 255]]
        );
    }

    #[test]
    fn test_decode_rgb_png_is_opaque() {
        let png = encode_png(1, 2, png::ColorType::Rgb, &[1, 2, 3, 4, 5, 6]);
        let image = DecodedImage::decode(&png, empty_fontdb).unwrap();
        assert_eq!(raster_samples(image), vec![[1, 2, 3, 255], [4, 5, 6, 255]]);
    }

    #[test]
    fn test_decode_grayscale_png() {
        let png = encode_png(2, 1, png::ColorType::Grayscale, &[0, 200]);
        let image = DecodedImage::decode(&png, empty_fontdb).unwrap();
        assert_eq!(raster_samples(image), vec![[0, 0, 0, 255], [200, 200, 200, 255]]);
    }

    #[test]
    fn test_decode_translucent_png_keeps_straight_alpha() {
        let data = [12, 34, 56, 78, 200, 100, 50, 1];
        let png = encode_png(2, 1, png::ColorType::Rgba, &data);
        let image = DecodedImage::decode(&png, empty_fontdb).unwrap();
        assert_eq!(raster_samples(image), vec![[12, 34, 56, 78], [200, 100, 50, 1]]);
    }

    #[test]
    fn test_decode_grayscale_alpha_png() {
        let png = encode_png(1, 1, png::ColorType::GrayscaleAlpha, &[90, 45]);
        let image = DecodedImage::decode(&png, empty_fontdb).unwrap();
        assert_eq!(raster_samples(image), vec![[90, 90, 90, 45]]);
    }

    #[test]
    fn test_decode_truncated_png_fails() {
        let png = encode_png(2, 2, png::ColorType::Rgb, &[7; 12]);
        let truncated = &png[..png.len() / 2];
        assert!(matches!(
            DecodedImage::decode(truncated, empty_fontdb),
            Err(RasterError::PngDecode(_))
        ));
    }

    #[test]
    fn test_decode_svg_size() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20">
            <rect width="40" height="20" fill="#336699"/>
        </svg>"##;
        let image = DecodedImage::decode(svg, empty_fontdb).unwrap();
        assert_eq!(image.format(), ImageFormat::Svg);
        assert_eq!((image.width(), image.height()), (40, 20));
    }

    #[test]
    fn test_decode_broken_svg_fails() {
        let svg = b"<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"4\"";
        assert!(matches!(
            DecodedImage::decode(svg, empty_fontdb),
            Err(RasterError::SvgParse(_))
        ));
    }

    #[test]
    fn test_decode_unknown_format_fails() {
        assert!(matches!(
            DecodedImage::decode(b"BM not a png", empty_fontdb),
            Err(RasterError::UnsupportedFormat)
        ));
    }
}
