//! Test fixtures and constants.

use std::path::{Path, PathBuf};

/// RGBA samples used across scenarios
pub mod colors {
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const BLUE: [u8; 4] = [0, 0, 255, 255];
    pub const TEAL: [u8; 4] = [0, 128, 128, 255];
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const CLEAR: [u8; 4] = [0, 0, 0, 0];
    /// Half-transparent red; counted separately from opaque red
    pub const RED_HALF: [u8; 4] = [255, 0, 0, 128];
}

/// Encode row-major RGBA samples as an 8-bit RGBA PNG.
pub fn png_bytes(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize, "pixel count mismatch");
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(&data).expect("PNG data");
    }
    buf
}

/// A PNG filled with one color.
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    png_bytes(width, height, &vec![rgba; (width * height) as usize])
}

/// The 2x2 scenario image: red, red, blue, transparent.
pub fn red_red_blue_clear() -> Vec<u8> {
    png_bytes(
        2,
        2,
        &[colors::RED, colors::RED, colors::BLUE, colors::CLEAR],
    )
}

/// An SVG of the given size filled with a single rect.
pub fn solid_svg(width: u32, height: u32, fill: &str) -> Vec<u8> {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">
  <rect width="{width}" height="{height}" fill="{fill}"/>
</svg>"#
    )
    .into_bytes()
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
