//! Semantic palette role assignment
//!
//! Maps a diversity-filtered color set onto the fixed design-token
//! slots: primary, secondary, accent, the theme neutrals and the
//! status colors. Status colors are product constants; theme neutrals
//! are either fixed (dark theme) or derived from the primary hue
//! (light theme) so contrast stays predictable regardless of how noisy
//! the source images were.

use crate::color::{hsl_to_rgb, hue_distance, relative_luminance, rgb_to_hex};
use crate::constants::{synthesis, theme};
use crate::{ColorPalette, ExtractedColor};

/// Assign semantic roles from a frequency-sorted color set
///
/// Returns the fixed default palette when the set is empty (no usable
/// signal).
pub fn synthesize(colors: &[ExtractedColor]) -> ColorPalette {
    if colors.is_empty() {
        return ColorPalette::default_palette();
    }

    let primary_idx = pick_primary(colors);
    let secondary_idx = pick_secondary(colors, primary_idx);
    let accent_idx = pick_accent(colors, primary_idx, secondary_idx);

    let primary = &colors[primary_idx];
    let avg_lightness = colors.iter().map(|c| c.hsl.l).sum::<f32>() / colors.len() as f32;

    let (background, surface, text, text_secondary) = if avg_lightness
        < synthesis::DARK_THEME_MAX_LIGHTNESS
    {
        (
            theme::DARK_BACKGROUND.to_string(),
            theme::DARK_SURFACE.to_string(),
            theme::DARK_TEXT.to_string(),
            theme::DARK_TEXT_SECONDARY.to_string(),
        )
    } else {
        // Light theme: near-neutral tints of the primary hue
        let background = neutral_of(primary.hsl.h, synthesis::BACKGROUND_LIGHTNESS);
        let surface = neutral_of(primary.hsl.h, synthesis::SURFACE_LIGHTNESS);
        let luminance = relative_luminance(primary.rgb.r, primary.rgb.g, primary.rgb.b);
        let (text, text_secondary) = if luminance > synthesis::TEXT_LUMINANCE_SPLIT {
            (theme::TEXT_ON_LIGHT, theme::TEXT_SECONDARY_ON_LIGHT)
        } else {
            (theme::TEXT_ON_DARK, theme::TEXT_SECONDARY_ON_DARK)
        };
        (background, surface, text.to_string(), text_secondary.to_string())
    };

    let additional_colors: Vec<String> = colors
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != primary_idx && *i != secondary_idx && *i != accent_idx)
        .take(synthesis::ADDITIONAL_CAP)
        .map(|(_, c)| c.hex.clone())
        .collect();

    ColorPalette {
        primary: primary.hex.clone(),
        secondary: colors[secondary_idx].hex.clone(),
        accent: colors[accent_idx].hex.clone(),
        background,
        surface,
        text,
        text_secondary,
        success: theme::SUCCESS.to_string(),
        warning: theme::WARNING.to_string(),
        error: theme::ERROR.to_string(),
        additional_colors,
    }
}

/// Primary: highest saturation; the frequency sort breaks ties in favor
/// of the more frequent color
fn pick_primary(colors: &[ExtractedColor]) -> usize {
    let mut best = 0;
    for (i, c) in colors.iter().enumerate().skip(1) {
        if c.hsl.s > colors[best].hsl.s {
            best = i;
        }
    }
    best
}

/// Secondary: first other color analogous or complementary to primary,
/// falling back to the next color in frequency order
fn pick_secondary(colors: &[ExtractedColor], primary_idx: usize) -> usize {
    let primary = &colors[primary_idx];
    let related = colors.iter().enumerate().find(|(i, c)| {
        if *i == primary_idx {
            return false;
        }
        let distance = hue_distance(c.hsl.h, primary.hsl.h);
        (distance >= synthesis::SECONDARY_ANALOGOUS.0 && distance <= synthesis::SECONDARY_ANALOGOUS.1)
            || (distance >= synthesis::SECONDARY_COMPLEMENTARY.0
                && distance <= synthesis::SECONDARY_COMPLEMENTARY.1)
    });
    match related {
        Some((i, _)) => i,
        None => (0..colors.len()).find(|&i| i != primary_idx).unwrap_or(primary_idx),
    }
}

/// Accent: first remaining color saturated enough to pop, falling back
/// to the next remaining color in frequency order
fn pick_accent(colors: &[ExtractedColor], primary_idx: usize, secondary_idx: usize) -> usize {
    let remaining = || (0..colors.len()).filter(|&i| i != primary_idx && i != secondary_idx);
    remaining()
        .find(|&i| colors[i].hsl.s > synthesis::ACCENT_MIN_SATURATION)
        .or_else(|| remaining().next())
        .unwrap_or(primary_idx)
}

fn neutral_of(hue: f32, lightness: f32) -> String {
    let (r, g, b) = hsl_to_rgb(hue, synthesis::NEUTRAL_SATURATION, lightness);
    rgb_to_hex(r, g, b)
}
