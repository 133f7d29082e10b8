//! Set-level analysis: classification, role assignment, merging

pub mod aggregator;
pub mod classifier;
pub mod synthesizer;

pub use aggregator::merge_color_sets;
pub use classifier::{classify_brightness, classify_harmony, classify_saturation};
pub use synthesizer::synthesize;
