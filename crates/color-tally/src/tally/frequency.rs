//! Per-scan frequency table
//!
//! [`FrequencyTable`] is built and consumed by a single scan. It keys entries
//! by packed RGBA so the hot loop never formats strings; a [`Color`] (hex and
//! HSL included) is only built the first time a key is seen.

use std::collections::HashMap;

use super::ignore::IgnoreSet;
use crate::color::{Color, Rgba};

/// A distinct color and how many pixels had it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCount {
    pub color: Color,
    /// Always at least 1.
    pub count: u64,
}

/// Occurrence counts of the colors seen by one scan.
///
/// Entries keep the order in which colors were first observed.
#[derive(Debug)]
pub struct FrequencyTable<'a> {
    ignore: &'a IgnoreSet,
    /// Packed RGBA key -> position in `entries`
    index: HashMap<u32, usize>,
    entries: Vec<ColorCount>,
    counted: u64,
}

impl<'a> FrequencyTable<'a> {
    pub fn new(ignore: &'a IgnoreSet) -> Self {
        Self {
            ignore,
            index: HashMap::new(),
            entries: Vec::new(),
            counted: 0,
        }
    }

    /// Record one sample.
    ///
    /// Returns `false` when the sample was skipped, either because it is
    /// fully transparent or because its color is ignored.
    #[inline]
    pub fn observe(&mut self, sample: Rgba) -> bool {
        if sample.is_transparent() {
            return false;
        }
        let key = sample.key();
        if self.ignore.contains_key(key) {
            return false;
        }

        let entries = &mut self.entries;
        let slot = *self.index.entry(key).or_insert_with(|| {
            entries.push(ColorCount {
                color: Color::from_rgba(sample),
                count: 0,
            });
            entries.len() - 1
        });
        self.entries[slot].count += 1;
        self.counted += 1;
        true
    }

    /// Number of distinct colors recorded so far.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Number of samples that were counted (not skipped).
    pub fn counted(&self) -> u64 {
        self.counted
    }

    pub fn count_of(&self, color: Rgba) -> u64 {
        self.index
            .get(&color.key())
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Consume the table, ranking colors by descending count.
    ///
    /// The sort is stable, so equal counts stay in first-seen order. Callers
    /// should not rely on any particular order among equal counts.
    pub fn into_ranked(self) -> Vec<ColorCount> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

impl Extend<Rgba> for FrequencyTable<'_> {
    fn extend<T: IntoIterator<Item = Rgba>>(&mut self, iter: T) {
        for sample in iter {
            self.observe(sample);
        }
    }
}
