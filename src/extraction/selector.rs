//! Dominant color selection with diversity enforcement
//!
//! Ranks histogram buckets by frequency, over-fetches a working pool,
//! then greedily keeps colors that are perceptually separated by hue
//! or lightness. When too few diverse candidates exist the remaining
//! slots are filled back from the frequency ranking, so tightly
//! clustered palettes never starve.

use crate::constants::selection;
use crate::extraction::quantizer::Histogram;
use crate::{color, ExtractedColor};

/// Selector narrowing a histogram to the top-K diverse colors
#[derive(Debug, Clone, Copy)]
pub struct DominantSelector {
    max_colors: usize,
}

impl Default for DominantSelector {
    fn default() -> Self {
        Self::new(selection::DEFAULT_MAX_COLORS)
    }
}

impl DominantSelector {
    /// Create a selector targeting `max_colors` dominant colors
    pub fn new(max_colors: usize) -> Self {
        Self { max_colors }
    }

    /// Select up to `max_colors` dominant colors from a histogram
    ///
    /// Output is sorted by descending frequency; ties keep the
    /// histogram's first-encounter order. Returns an empty vec for an
    /// empty histogram (no usable signal).
    pub fn select(&self, histogram: &Histogram) -> Vec<ExtractedColor> {
        if histogram.is_empty() {
            return Vec::new();
        }

        let total = histogram.total() as f32;
        let mut ranked = histogram.entries().to_vec();
        // Stable sort: equal counts keep first-encounter order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(self.max_colors * selection::POOL_FACTOR);

        let pool: Vec<ExtractedColor> = ranked
            .iter()
            .map(|entry| {
                ExtractedColor::from_rgb(
                    entry.rgb.0,
                    entry.rgb.1,
                    entry.rgb.2,
                    entry.count as f32 / total,
                )
            })
            .collect();

        let mut chosen: Vec<usize> = Vec::with_capacity(self.max_colors);
        for (i, candidate) in pool.iter().enumerate() {
            if chosen.len() >= self.max_colors {
                break;
            }
            if chosen.is_empty() || is_diverse(candidate, &chosen, &pool) {
                chosen.push(i);
            }
        }

        // Frequency-order fill when hues cluster too tightly for the
        // diversity rule to reach the target count
        if chosen.len() < self.max_colors {
            for i in 0..pool.len() {
                if chosen.len() >= self.max_colors {
                    break;
                }
                if !chosen.contains(&i) {
                    chosen.push(i);
                }
            }
        }

        tracing::debug!(
            pool = pool.len(),
            selected = chosen.len(),
            "Selected dominant colors"
        );

        // Emit in pool order: the pool is already frequency-sorted with
        // first-encounter ties, so fill-restored colors cannot land
        // behind less frequent diverse picks
        chosen.sort_unstable();
        chosen.into_iter().map(|i| pool[i].clone()).collect()
    }
}

/// Diversity rule: a candidate must differ from every accepted color by
/// more than 30 degrees of hue or more than 20 points of lightness
fn is_diverse(candidate: &ExtractedColor, accepted: &[usize], pool: &[ExtractedColor]) -> bool {
    accepted.iter().all(|&i| {
        let existing = &pool[i];
        color::hue_distance(candidate.hsl.h, existing.hsl.h) > selection::MIN_HUE_DISTANCE
            || (candidate.hsl.l - existing.hsl.l).abs() > selection::MIN_LIGHTNESS_DISTANCE
    })
}
