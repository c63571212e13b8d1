use crate::error::RasterError;
use crate::rendering::decode::DecodedImage;
use crate::rendering::source::ImageSource;
use color_tally::PixelBuffer;
use resvg::usvg::Transform;
use std::sync::{Arc, OnceLock};
use tiny_skia::{ColorU8, FilterQuality, IntSize, Pixmap, PixmapPaint};

/// Outcome of checking a scale factor against the useful range (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleCheck {
    Ok,
    /// Zero, negative or NaN: the target bitmap has no pixels
    NoOp,
    /// Greater than 1: upsampling adds no color information
    Pointless,
}

impl ScaleCheck {
    pub fn of(scale: f64) -> Self {
        if scale.is_nan() || scale <= 0.0 {
            ScaleCheck::NoOp
        } else if scale > 1.0 {
            ScaleCheck::Pointless
        } else {
            ScaleCheck::Ok
        }
    }

    /// Log a warning for out-of-range scales. Extraction carries on either way.
    pub fn warn(self, scale: f64) {
        match self {
            ScaleCheck::Ok => {}
            ScaleCheck::NoOp => tracing::warn!(
                scale,
                "Scale is not between 0 and 1; a scale of 0 or less is a no-op and yields no colors"
            ),
            ScaleCheck::Pointless => tracing::warn!(
                scale,
                "Scale is not between 0 and 1; scaling above 1 is pointless and only slows extraction"
            ),
        }
    }
}

/// Target bitmap size for a native size and scale: each side is
/// `floor(native * scale)`. Non-positive and NaN scales give zero.
pub fn target_size(width: u32, height: u32, scale: f64) -> (u32, u32) {
    // `as` saturates: negatives and NaN become 0, overflow becomes u32::MAX
    let side = |native: u32| (native as f64 * scale).floor() as u32;
    (side(width), side(height))
}

/// Decodes images and redraws them at a scaled size into RGBA buffers.
///
/// The font database used for SVG text is loaded from the system on first
/// use and shared by every later render.
pub struct Rasterizer {
    fontdb: OnceLock<Arc<fontdb::Database>>,
}

impl Rasterizer {
    /// Create a rasterizer that loads system fonts lazily.
    pub fn new() -> Self {
        Self {
            fontdb: OnceLock::new(),
        }
    }

    /// Create a rasterizer with a prepared font database.
    pub fn with_fonts(fontdb: Arc<fontdb::Database>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(fontdb);
        Self { fontdb: cell }
    }

    fn fontdb(&self) -> Arc<fontdb::Database> {
        self.fontdb
            .get_or_init(|| {
                let mut db = fontdb::Database::new();
                db.load_system_fonts();
                tracing::debug!(font_count = db.len(), "Loaded fonts for SVG text rendering");
                Arc::new(db)
            })
            .clone()
    }

    /// Decode `source` and render it at `scale` into a pixel buffer.
    ///
    /// Out-of-range scales are logged, not rejected. A scale that rounds a
    /// side down to zero produces an empty buffer.
    pub fn rasterize(&self, source: &ImageSource, scale: f64) -> Result<PixelBuffer, RasterError> {
        ScaleCheck::of(scale).warn(scale);

        let data = source.read()?;
        let image = DecodedImage::decode(&data, || self.fontdb())?;
        let (width, height) = target_size(image.width(), image.height(), scale);

        tracing::debug!(
            source = %source.describe(),
            format = ?image.format(),
            native_width = image.width(),
            native_height = image.height(),
            width,
            height,
            "Rasterizing image"
        );

        image.render(width, height, scale)
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodedImage {
    /// Render into a `width` x `height` RGBA buffer.
    pub fn render(&self, width: u32, height: u32, scale: f64) -> Result<PixelBuffer, RasterError> {
        render(self, width, height, scale)
    }
}

/// Draw `image` scaled by `scale` from the origin into a `width` x `height`
/// bitmap and return its straight-alpha pixels.
pub fn render(
    image: &DecodedImage,
    width: u32,
    height: u32,
    scale: f64,
) -> Result<PixelBuffer, RasterError> {
    if width == 0 || height == 0 {
        return Ok(PixelBuffer::empty(width, height));
    }

    // Native-size rasters are counted from the decoded bytes untouched
    if let DecodedImage::Raster(native) = image {
        if native.width() == width && native.height() == height {
            return Ok(native.clone());
        }
    }

    let mut pixmap =
        Pixmap::new(width, height).ok_or(RasterError::PixmapAllocation { width, height })?;
    let transform = Transform::from_scale(scale as f32, scale as f32);

    match image {
        DecodedImage::Raster(native) => {
            let source = premultiplied_pixmap(native)?;
            let paint = PixmapPaint {
                quality: FilterQuality::Bilinear,
                ..Default::default()
            };
            pixmap.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
        }
        DecodedImage::Vector(tree) => {
            resvg::render(tree, transform, &mut pixmap.as_mut());
        }
    }

    Ok(to_pixel_buffer(&pixmap))
}

/// Premultiply straight RGBA for drawing with tiny-skia.
fn premultiplied_pixmap(pixels: &PixelBuffer) -> Result<Pixmap, RasterError> {
    let (width, height) = (pixels.width(), pixels.height());
    let data = pixels
        .samples()
        .flat_map(|s| {
            let p = ColorU8::from_rgba(s.r, s.g, s.b, s.a).premultiply();
            [p.red(), p.green(), p.blue(), p.alpha()]
        })
        .collect();

    IntSize::from_wh(width, height)
        .and_then(|size| Pixmap::from_vec(data, size))
        .ok_or(RasterError::PixmapAllocation { width, height })
}

/// Demultiply a pixmap into a row-major RGBA buffer.
fn to_pixel_buffer(pixmap: &Pixmap) -> PixelBuffer {
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    PixelBuffer::new(data, pixmap.width(), pixmap.height())
}
