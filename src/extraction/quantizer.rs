//! Pixel quantization into a coarse RGB histogram
//!
//! Each sampled pixel is floored per channel to a multiple of the
//! bucket size, merging near-identical colors before counting.
//! Near-black and near-white pixels (typically backgrounds or text)
//! are discarded so they cannot dominate the histogram.

use std::collections::HashMap;

use crate::buffer::PixelBuffer;
use crate::constants::quantize;

/// One quantized color and the number of retained pixels it absorbed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramEntry {
    /// Quantized RGB key (every channel a multiple of the bucket size)
    pub rgb: (u8, u8, u8),
    /// Retained pixels that fell into this bucket
    pub count: u32,
}

/// Frequency histogram over quantized colors.
///
/// Entries keep first-encounter order (row-major scan of the sampling
/// canvas) so downstream tie-breaking is deterministic. `total` counts
/// retained pixels only; it is the denominator for frequencies.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    entries: Vec<HistogramEntry>,
    total: u32,
}

impl Histogram {
    /// Entries in first-encounter order
    pub fn entries(&self) -> &[HistogramEntry] {
        &self.entries
    }

    /// Total retained (non-discarded) pixels
    pub fn total(&self) -> u32 {
        self.total
    }

    /// True when every sampled pixel was discarded as noise
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Quantizer bucketing canvas samples into a [`Histogram`]
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    bucket_size: u32,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new(quantize::DEFAULT_BUCKET_SIZE)
    }
}

impl Quantizer {
    /// Create a quantizer with the given bucket size.
    ///
    /// Bucket size is validated at engine construction; this type
    /// assumes a positive value.
    pub fn new(bucket_size: u32) -> Self {
        Self { bucket_size }
    }

    /// Build the quantized histogram for one image
    ///
    /// # Arguments
    ///
    /// * `buffer` - Decoded source image
    /// * `canvas_size` - Edge of the square sampling canvas
    ///
    /// # Returns
    ///
    /// A [`Histogram`]; empty when every pixel was near-black or
    /// near-white (no usable signal)
    pub fn histogram(&self, buffer: &PixelBuffer, canvas_size: u32) -> Histogram {
        let mut index: HashMap<(u8, u8, u8), usize> = HashMap::new();
        let mut entries: Vec<HistogramEntry> = Vec::new();
        let mut total = 0u32;

        for (r, g, b) in buffer.sample_canvas(canvas_size) {
            let mean = (r as f32 + g as f32 + b as f32) / 3.0;
            if mean < quantize::DISCARD_MEAN_LOW || mean > quantize::DISCARD_MEAN_HIGH {
                continue;
            }

            let key = (
                self.floor_channel(r),
                self.floor_channel(g),
                self.floor_channel(b),
            );
            match index.get(&key) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(key, entries.len());
                    entries.push(HistogramEntry { rgb: key, count: 1 });
                }
            }
            total += 1;
        }

        tracing::debug!(
            buckets = entries.len(),
            retained = total,
            bucket_size = self.bucket_size,
            "Quantized pixel samples"
        );

        Histogram { entries, total }
    }

    fn floor_channel(&self, value: u8) -> u8 {
        ((value as u32 / self.bucket_size) * self.bucket_size) as u8
    }
}
