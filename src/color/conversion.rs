//! Color space conversion utilities
//!
//! Provides the pure color math the extraction pipeline is built on:
//! - RGB to HSL and back (via the `palette` crate)
//! - Hex color formatting and parsing
//! - WCAG 2.1 relative luminance
//! - Circular hue distance
//!
//! All functions are stateless and deterministic. HSL values use the
//! conventional ranges: hue in degrees [0, 360), saturation and
//! lightness in percent [0, 100].

use palette::{FromColor, Hsl, Srgb};

use crate::error::{ExtractionError, Result};

/// Convert RGB (0-255) to HSL
///
/// # Arguments
///
/// * `r`, `g`, `b` - RGB values in range [0, 255]
///
/// # Returns
///
/// `(hue, saturation, lightness)` with hue in [0, 360) degrees and
/// saturation/lightness in [0, 100]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let hsl = Hsl::from_color(srgb);
    (
        hsl.hue.into_positive_degrees(),
        hsl.saturation * 100.0,
        hsl.lightness * 100.0,
    )
}

/// Convert HSL back to RGB (0-255)
///
/// # Arguments
///
/// * `h` - Hue in degrees
/// * `s`, `l` - Saturation and lightness in [0, 100]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let hsl = Hsl::new(h, s / 100.0, l / 100.0);
    let srgb = Srgb::from_color(hsl);
    (
        (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

/// Format RGB values as an uppercase hex color string (e.g., "#FF0000")
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parse a hex color string ("#FF0000" or "FF0000") into RGB values
///
/// # Errors
///
/// Returns `ExtractionError::InvalidHex` if the string is not a valid
/// 24-bit hex color
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(ExtractionError::hex(format!(
            "expected 6 hex digits, got {}",
            hex.len()
        )));
    }
    // Byte-slicing below requires ASCII; multibyte input must error,
    // not panic on a char boundary
    if !hex.is_ascii() {
        return Err(ExtractionError::hex("expected ASCII hex digits"));
    }

    let r = u8::from_str_radix(&hex[0..2], 16)
        .map_err(|e| ExtractionError::hex(format!("invalid red value: {}", e)))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .map_err(|e| ExtractionError::hex(format!("invalid green value: {}", e)))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .map_err(|e| ExtractionError::hex(format!("invalid blue value: {}", e)))?;

    Ok((r, g, b))
}

/// WCAG 2.1 relative luminance of an RGB color
///
/// Channels are linearized before the weighted sum
/// `0.2126 R + 0.7152 G + 0.0722 B`. Used to pick readable text colors
/// for synthesized palettes.
///
/// # Returns
///
/// Luminance in [0.0, 1.0]; 0.0 is black, 1.0 is white
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f32 {
    fn linearize(channel: u8) -> f32 {
        let c = channel as f32 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Circular distance between two hues in degrees, always in [0, 180]
pub fn hue_distance(h1: f32, h2: f32) -> f32 {
    let d = (h1 - h2).abs() % 360.0;
    d.min(360.0 - d)
}
