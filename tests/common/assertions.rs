//! Assertion helpers for tests.

use dominant_colors::Color;
use pretty_assertions::assert_eq;

/// Hex strings of `colors`, in order.
pub fn hexes(colors: &[Color]) -> Vec<String> {
    colors.iter().map(|c| c.hex().to_string()).collect()
}

/// Assert the ranked hex output matches exactly.
pub fn assert_hexes(colors: &[Color], expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    assert_eq!(hexes(colors), expected);
}

/// Assert every color is distinct and fully described.
pub fn assert_well_formed(colors: &[Color]) {
    let mut seen = std::collections::HashSet::new();
    for color in colors {
        assert!(seen.insert(color.hex().to_string()), "duplicate {}", color.hex());
        assert!(color.alpha() > 0, "transparent color {} returned", color.hex());
        let hsl = color.hsl();
        assert!(hsl.h <= 100 && hsl.s <= 100 && hsl.l <= 100, "{hsl:?} out of range");
        let [r, g, b] = color.rgb();
        assert!(color.hex().starts_with(&format!("#{r:02x}{g:02x}{b:02x}")));
    }
}

/// Assert `color` is opaque and each channel is within one step of
/// `expected`. Resampled pixels may round differently from the source.
pub fn assert_near(color: &Color, expected: [u8; 3]) {
    let actual = color.rgb();
    let close = actual
        .iter()
        .zip(expected)
        .all(|(&a, e)| a.abs_diff(e) <= 1);
    assert!(close, "expected about {expected:?}, got {actual:?}");
    assert_eq!(color.alpha(), 255);
}
