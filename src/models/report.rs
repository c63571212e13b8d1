use color_tally::{Color, ColorCount};
use serde::Serialize;

/// Serializable view of one extracted color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: [u8; 3],
    /// Hue, saturation and lightness, each 0..=100
    pub hsl: [u8; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl From<&Color> for ColorReport {
    fn from(color: &Color) -> Self {
        Self {
            hex: color.hex().to_string(),
            rgb: color.rgb(),
            hsl: color.hsl().to_array(),
            count: None,
        }
    }
}

impl From<&ColorCount> for ColorReport {
    fn from(entry: &ColorCount) -> Self {
        Self {
            count: Some(entry.count),
            ..Self::from(&entry.color)
        }
    }
}

impl ColorReport {
    /// One line for terminal output: `#rrggbb  rgb(r, g, b)  hsl(h, s, l)`.
    pub fn line(&self) -> String {
        let [r, g, b] = self.rgb;
        let [h, s, l] = self.hsl;
        let mut line = format!("{:<9}  rgb({r}, {g}, {b})  hsl({h}, {s}, {l})", self.hex);
        if let Some(count) = self.count {
            line.push_str(&format!("  x{count}"));
        }
        line
    }
}
