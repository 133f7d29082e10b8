//! Per-image extraction stages
//!
//! Quantization into a coarse histogram, then narrowing to a
//! diversity-constrained dominant set.

pub mod quantizer;
pub mod selector;

pub use quantizer::{Histogram, HistogramEntry, Quantizer};
pub use selector::DominantSelector;
