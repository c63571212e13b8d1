use crate::error::ExtractError;
use crate::models::ExtractOptions;
use crate::rendering::{ImageSource, Rasterizer};
use color_tally::{Color, ColorCount};
use std::sync::Arc;

/// Rasterizes images and ranks their colors by frequency.
///
/// Holds no per-call state, so one extractor can serve concurrent calls.
#[derive(Clone, Default)]
pub struct ColorExtractor {
    rasterizer: Arc<Rasterizer>,
}

impl ColorExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct colors with their pixel counts, most frequent first.
    pub fn tally(
        &self,
        source: &ImageSource,
        options: &ExtractOptions,
    ) -> Result<Vec<ColorCount>, ExtractError> {
        let pixels = self.rasterizer.rasterize(source, options.scale)?;
        let ranked = color_tally::tally(&pixels, &options.ignore);

        tracing::debug!(
            source = %source.describe(),
            pixels = pixels.len(),
            distinct = ranked.len(),
            "Counted colors"
        );

        Ok(ranked)
    }

    /// Distinct colors, most frequent first. Empty when nothing countable
    /// remains after dropping transparent and ignored pixels.
    pub fn extract(
        &self,
        source: &ImageSource,
        options: &ExtractOptions,
    ) -> Result<Vec<Color>, ExtractError> {
        Ok(self
            .tally(source, options)?
            .into_iter()
            .map(|entry| entry.color)
            .collect())
    }

    /// The most frequent color, if any.
    pub fn dominant(
        &self,
        source: &ImageSource,
        options: &ExtractOptions,
    ) -> Result<Option<Color>, ExtractError> {
        Ok(self.extract(source, options)?.into_iter().next())
    }

    /// [`extract`](Self::extract) on the blocking thread pool.
    ///
    /// Decoding and counting are CPU-bound, so they stay off the async
    /// worker threads.
    pub async fn extract_async(
        &self,
        source: ImageSource,
        options: Arc<ExtractOptions>,
    ) -> Result<Vec<Color>, ExtractError> {
        let extractor = self.clone();

        tokio::task::spawn_blocking(move || extractor.extract(&source, &options))
            .await
            .map_err(|e| ExtractError::Task(e.to_string()))?
    }

    /// [`dominant`](Self::dominant) on the blocking thread pool.
    pub async fn dominant_async(
        &self,
        source: ImageSource,
        options: Arc<ExtractOptions>,
    ) -> Result<Option<Color>, ExtractError> {
        Ok(self
            .extract_async(source, options)
            .await?
            .into_iter()
            .next())
    }
}

/// Extract the ranked colors of one image with a fresh extractor.
///
/// Convenient for one-off calls. Reuse a [`ColorExtractor`] when extracting
/// many SVGs so system fonts are loaded once.
pub fn extract_colors(
    source: impl Into<ImageSource>,
    options: &ExtractOptions,
) -> Result<Vec<Color>, ExtractError> {
    ColorExtractor::new().extract(&source.into(), options)
}
