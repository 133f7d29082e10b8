//! Extraction engine tying the pipeline stages together
//!
//! Holds only the immutable configuration: every extraction call is an
//! independent, deterministic function of its input buffers. Batch
//! extraction fans per-image work out over rayon, then folds results
//! back in input order so aggregation stays deterministic.

use rayon::prelude::*;

use crate::analysis::{
    classify_brightness, classify_harmony, classify_saturation, merge_color_sets, synthesize,
};
use crate::buffer::PixelBuffer;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::extraction::{DominantSelector, Quantizer};
use crate::{ColorExtractionResult, ExtractedColor};

/// Color extraction and palette synthesis engine.
///
/// Construction validates the configuration; everything after that
/// degrades instead of failing. An engine is cheap to create and safe
/// to share across threads.
#[derive(Debug, Clone)]
pub struct ColorEngine {
    config: EngineConfig,
}

impl Default for ColorEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}

impl ColorEngine {
    /// Create an engine from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidConfig` when a field is
    /// zero-valued; this is the only fatal failure in the engine.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's immutable configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract the diversity-filtered dominant color set of one image
    ///
    /// Returns an empty vec when every pixel was discarded as
    /// near-black/near-white noise.
    pub fn dominant_colors(&self, buffer: &PixelBuffer) -> Vec<ExtractedColor> {
        let histogram =
            Quantizer::new(self.config.bucket_size).histogram(buffer, self.config.canvas_size);
        DominantSelector::new(self.config.max_colors).select(&histogram)
    }

    /// Run the full single-image pipeline: quantize, select, classify,
    /// synthesize
    ///
    /// An image with no usable signal yields the fixed default result.
    pub fn extract(&self, buffer: &PixelBuffer) -> ColorExtractionResult {
        self.finish(self.dominant_colors(buffer))
    }

    /// Extract from several images and merge into one consolidated result
    ///
    /// Images are processed in parallel; the merge itself folds
    /// per-image sets in input order. An empty slice, or a batch where
    /// every image lacked signal, yields the default result.
    pub fn extract_combined(&self, buffers: &[PixelBuffer]) -> ColorExtractionResult {
        let sets: Vec<Vec<ExtractedColor>> = buffers
            .par_iter()
            .map(|buffer| self.dominant_colors(buffer))
            .collect();
        self.merge_partial(&sets)
    }

    /// Merge per-image dominant color sets produced elsewhere.
    ///
    /// This is the aggregation surface for callers whose fetch/decode
    /// collaborator already ran per-image extraction; sources that
    /// failed upstream simply contribute an empty set.
    pub fn merge_partial(&self, sets: &[Vec<ExtractedColor>]) -> ColorExtractionResult {
        let mut merged = merge_color_sets(sets);
        merged.truncate(self.config.max_colors);
        self.finish(merged)
    }

    /// Classify and synthesize a selected set, or fall back to the
    /// default result when it is empty
    fn finish(&self, colors: Vec<ExtractedColor>) -> ColorExtractionResult {
        if colors.is_empty() {
            tracing::debug!("No usable color signal, returning default result");
            return ColorExtractionResult::default_result();
        }

        let color_harmony = classify_harmony(&colors);
        let brightness = classify_brightness(&colors);
        let saturation = classify_saturation(&colors);
        let palette = synthesize(&colors);

        ColorExtractionResult {
            dominant_colors: colors,
            palette,
            color_harmony,
            brightness,
            saturation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Channels;
    use crate::error::ExtractionError;

    fn solid(rgb: (u8, u8, u8)) -> PixelBuffer {
        let mut data = Vec::new();
        for _ in 0..100 * 100 {
            data.extend_from_slice(&[rgb.0, rgb.1, rgb.2]);
        }
        PixelBuffer::new(100, 100, Channels::Rgb, data).unwrap()
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = EngineConfig {
            bucket_size: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            ColorEngine::new(config),
            Err(ExtractionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_primary_drawn_from_dominant_colors() {
        let engine = ColorEngine::default();
        let result = engine.extract(&solid((0, 0, 255)));
        assert!(!result.dominant_colors.is_empty());
        assert!(result
            .dominant_colors
            .iter()
            .any(|c| c.hex == result.palette.primary));
    }

    #[test]
    fn test_combined_over_empty_batch_is_default() {
        let engine = ColorEngine::default();
        let result = engine.extract_combined(&[]);
        assert_eq!(result, ColorExtractionResult::default_result());
    }

    #[test]
    fn test_merge_partial_skips_failed_sources() {
        let engine = ColorEngine::default();
        let blue = engine.dominant_colors(&solid((0, 0, 255)));
        // One failed source (empty set) alongside one success
        let result = engine.merge_partial(&[Vec::new(), blue.clone()]);
        assert_eq!(result.dominant_colors.len(), 1);
        assert_eq!(result.dominant_colors[0].hex, blue[0].hex);
    }
}
