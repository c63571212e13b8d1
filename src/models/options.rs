use crate::error::ExtractError;
use color_tally::{IgnoreSet, Rgba};

/// Default scale factor applied before counting.
pub const DEFAULT_SCALE: f64 = 0.3;

/// Hex colors ignored unless configured otherwise.
pub const DEFAULT_IGNORE: [&str; 2] = ["#000000", "#ffffff"];

/// Options for one extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Colors neither counted nor returned
    pub ignore: IgnoreSet,
    /// Downsampling ratio, useful range (0, 1]. Lower is faster and coarser.
    pub scale: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            ignore: IgnoreSet::black_and_white(),
            scale: DEFAULT_SCALE,
        }
    }
}

impl ExtractOptions {
    /// Default options with a different scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Replace the ignore set.
    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// Replace the ignore set with parsed hex strings.
    pub fn with_ignore_hex<I, S>(self, colors: I) -> Result<Self, ExtractError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.with_ignore(parse_ignore(colors)?))
    }
}

/// Parse hex strings into an ignore set, naming the offending entry on
/// failure.
pub fn parse_ignore<I, S>(colors: I) -> Result<IgnoreSet, ExtractError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    colors
        .into_iter()
        .map(|s| {
            let s = s.as_ref();
            s.parse::<Rgba>().map_err(|source| ExtractError::InvalidColor {
                input: s.to_string(),
                source,
            })
        })
        .collect()
}
