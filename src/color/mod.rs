//! Color space math and naming
//!
//! Pure, stateless helpers shared by every pipeline stage.

pub mod conversion;
pub mod naming;

pub use conversion::{hex_to_rgb, hsl_to_rgb, hue_distance, relative_luminance, rgb_to_hex, rgb_to_hsl};
pub use naming::color_name;
