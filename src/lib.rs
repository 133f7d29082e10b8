//! # palette-forge
//!
//! A color extraction and palette synthesis engine for design-system
//! tokens. Given one or more decoded raster images, it produces a
//! small, visually distinct, semantically labeled color palette
//! (primary/secondary/accent/background/surface/text and friends)
//! together with harmony, brightness and saturation descriptors.
//!
//! The engine performs no I/O: fetching, decoding, persistence and
//! report templating belong to its callers. It consumes decoded pixel
//! buffers and emits value records, deterministically.
//!
//! ## Example
//!
//! ```rust
//! use palette_forge::{extract_colors, Channels, PixelBuffer};
//!
//! // A 2x2 solid blue image, RGB
//! let data = vec![0u8, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0, 255];
//! let buffer = PixelBuffer::new(2, 2, Channels::Rgb, data)?;
//!
//! let result = extract_colors(&buffer);
//! println!("primary: {}", result.palette.primary);
//! # Ok::<(), palette_forge::ExtractionError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod analysis;
pub mod buffer;
pub mod color;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod extraction;

pub use buffer::{Channels, PixelBuffer};
pub use config::EngineConfig;
pub use engine::ColorEngine;
pub use error::{ExtractionError, Result};

use constants::theme;

/// RGB components of an extracted color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL components of an extracted color.
///
/// Hue in degrees [0, 360), saturation and lightness in percent
/// [0, 100]; values are rounded to whole numbers for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// One dominant color with every representation downstream layers need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedColor {
    /// Uppercase hex string, e.g. "#3366CC"
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    /// Fraction of retained pixels in this color's quantization bucket
    pub frequency: f32,
    /// Coarse human-readable label, e.g. "Dark Blue"
    pub name: String,
}

impl ExtractedColor {
    /// Build a color record from RGB components and a frequency
    pub fn from_rgb(r: u8, g: u8, b: u8, frequency: f32) -> Self {
        let (h, s, l) = color::rgb_to_hsl(r, g, b);
        let name = color::color_name(h, s, l);
        Self {
            hex: color::rgb_to_hex(r, g, b),
            rgb: Rgb { r, g, b },
            hsl: Hsl {
                h: h.round(),
                s: s.round(),
                l: l.round(),
            },
            frequency,
            name,
        }
    }
}

/// Hue relationship among the leading extracted colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHarmony {
    Complementary,
    Analogous,
    Triadic,
    Monochromatic,
    Custom,
}

/// Overall lightness bucket of the extracted set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Light,
    Dark,
    Mixed,
}

/// Overall saturation bucket of the extracted set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Saturation {
    Vibrant,
    Muted,
    Mixed,
}

/// Ten fixed semantic slots plus overflow, rendered downstream as CSS
/// custom properties or equivalent design-token declarations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub additional_colors: Vec<String>,
}

impl ColorPalette {
    /// The fixed palette substituted when no usable color signal exists
    pub fn default_palette() -> Self {
        Self {
            primary: theme::DEFAULT_PRIMARY.to_string(),
            secondary: theme::DEFAULT_SECONDARY.to_string(),
            accent: theme::DEFAULT_ACCENT.to_string(),
            background: theme::DEFAULT_BACKGROUND.to_string(),
            surface: theme::DEFAULT_SURFACE.to_string(),
            text: theme::DEFAULT_TEXT.to_string(),
            text_secondary: theme::DEFAULT_TEXT_SECONDARY.to_string(),
            success: theme::SUCCESS.to_string(),
            warning: theme::WARNING.to_string(),
            error: theme::ERROR.to_string(),
            additional_colors: Vec::new(),
        }
    }
}

/// Complete extraction output for one image or one merged batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorExtractionResult {
    /// Dominant colors in descending frequency order
    pub dominant_colors: Vec<ExtractedColor>,
    pub palette: ColorPalette,
    pub color_harmony: ColorHarmony,
    pub brightness: Brightness,
    pub saturation: Saturation,
}

impl ColorExtractionResult {
    /// The fixed result returned when zero sources produced any signal
    pub fn default_result() -> Self {
        Self {
            dominant_colors: Vec::new(),
            palette: ColorPalette::default_palette(),
            color_harmony: ColorHarmony::Custom,
            brightness: Brightness::Mixed,
            saturation: Saturation::Mixed,
        }
    }
}

/// Extract colors from a single image with the default configuration
///
/// Convenience wrapper over [`ColorEngine::extract`]; the default
/// configuration is always valid.
pub fn extract_colors(buffer: &PixelBuffer) -> ColorExtractionResult {
    ColorEngine::default().extract(buffer)
}
