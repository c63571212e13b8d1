//! Colors excluded from counting and from results

use std::collections::HashSet;

use crate::color::{ParseColorError, Rgba};

/// A set of colors the aggregator skips.
///
/// Membership is by packed RGBA key, so `#ffffff` matches only fully opaque
/// white. A translucent white pixel has the key of `#ffffffaa` and is
/// counted unless that exact form is also ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    keys: HashSet<u32>,
}

impl IgnoreSet {
    /// An empty set: every non-transparent pixel is counted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opaque black and opaque white, the usual background colors.
    pub fn black_and_white() -> Self {
        [Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]
            .into_iter()
            .collect()
    }

    /// Parse a list of hex strings (see [`Rgba`]'s `FromStr` for the
    /// accepted forms).
    ///
    /// # Example
    ///
    /// ```
    /// use color_tally::{IgnoreSet, Rgba};
    ///
    /// let ignore = IgnoreSet::from_hex(["#000000", "#FFF"]).unwrap();
    /// assert!(ignore.contains(Rgba::opaque(255, 255, 255)));
    /// assert_eq!(ignore, IgnoreSet::black_and_white());
    /// ```
    pub fn from_hex<I, S>(colors: I) -> Result<Self, ParseColorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        colors
            .into_iter()
            .map(|s| s.as_ref().parse::<Rgba>())
            .collect()
    }

    /// Add a color. Returns `false` if it was already present.
    pub fn insert(&mut self, color: Rgba) -> bool {
        self.keys.insert(color.key())
    }

    #[inline]
    pub fn contains(&self, color: Rgba) -> bool {
        self.contains_key(color.key())
    }

    /// Membership test on a packed key (see [`Rgba::key`]).
    #[inline]
    pub fn contains_key(&self, key: u32) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Canonical hex strings of the members, sorted.
    pub fn to_hex(&self) -> Vec<String> {
        let mut hex: Vec<String> = self
            .keys
            .iter()
            .map(|&key| Rgba::from_key(key).to_hex())
            .collect();
        hex.sort();
        hex
    }
}

impl FromIterator<Rgba> for IgnoreSet {
    fn from_iter<T: IntoIterator<Item = Rgba>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().map(Rgba::key).collect(),
        }
    }
}

impl Extend<Rgba> for IgnoreSet {
    fn extend<T: IntoIterator<Item = Rgba>>(&mut self, iter: T) {
        self.keys.extend(iter.into_iter().map(Rgba::key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        let ignore = IgnoreSet::black_and_white();
        assert_eq!(ignore.len(), 2);
        assert!(ignore.contains(Rgba::opaque(0, 0, 0)));
        assert!(ignore.contains(Rgba::opaque(255, 255, 255)));
        assert!(!ignore.contains(Rgba::opaque(255, 0, 0)));
        assert_eq!(ignore.to_hex(), vec!["#000000", "#ffffff"]);
    }

    #[test]
    fn test_alpha_is_part_of_identity() {
        let ignore = IgnoreSet::black_and_white();
        assert!(!ignore.contains(Rgba::new(255, 255, 255, 128)));

        let ignore = IgnoreSet::from_hex(["#ffffff80"]).unwrap();
        assert!(ignore.contains(Rgba::new(255, 255, 255, 128)));
        assert!(!ignore.contains(Rgba::opaque(255, 255, 255)));
    }

    #[test]
    fn test_from_hex_normalizes_case_and_form() {
        let ignore = IgnoreSet::from_hex(["#FF0000", "ff0000", "#f00", "#ff0000ff"]).unwrap();
        assert_eq!(ignore.len(), 1);
        assert_eq!(ignore.to_hex(), vec!["#ff0000"]);
    }

    #[test]
    fn test_from_hex_reports_first_bad_entry() {
        let err = IgnoreSet::from_hex(["#000000", "#12345", "nothex"]).unwrap_err();
        assert_eq!(err, ParseColorError::InvalidLength(5));
    }

    #[test]
    fn test_empty_set() {
        let ignore = IgnoreSet::from_hex(Vec::<String>::new()).unwrap();
        assert!(ignore.is_empty());
        assert_eq!(ignore, IgnoreSet::new());
    }

    #[test]
    fn test_insert_and_extend() {
        let mut ignore = IgnoreSet::new();
        assert!(ignore.insert(Rgba::opaque(1, 2, 3)));
        assert!(!ignore.insert(Rgba::opaque(1, 2, 3)));
        ignore.extend([Rgba::opaque(4, 5, 6)]);
        assert_eq!(ignore.len(), 2);
    }
}
