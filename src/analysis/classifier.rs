//! Categorical descriptors for a selected color set
//!
//! Derives the harmony, brightness and saturation labels reports show
//! next to a palette. Plain threshold rules over the set's HSL values;
//! identical input always yields identical labels.

use crate::color::hue_distance;
use crate::constants::classify;
use crate::{Brightness, ColorHarmony, ExtractedColor, Saturation};

fn in_range(value: f32, range: (f32, f32)) -> bool {
    value >= range.0 && value <= range.1
}

/// Classify the hue relationship among the leading colors.
///
/// Rules are evaluated in order, first match wins: average hue spread
/// below 30 degrees is monochromatic, [150, 210] complementary,
/// [30, 60] analogous; failing those, any pairwise distance in
/// [110, 130] is triadic, and everything else is custom.
pub fn classify_harmony(colors: &[ExtractedColor]) -> ColorHarmony {
    if colors.len() < 2 {
        return ColorHarmony::Monochromatic;
    }

    let hues: Vec<f32> = colors
        .iter()
        .take(classify::HUE_SAMPLE)
        .map(|c| c.hsl.h)
        .collect();

    let spreads: Vec<f32> = hues[1..].iter().map(|&h| hue_distance(h, hues[0])).collect();
    let avg = spreads.iter().sum::<f32>() / spreads.len() as f32;

    if avg < classify::MONOCHROMATIC_MAX {
        return ColorHarmony::Monochromatic;
    }
    if in_range(avg, classify::COMPLEMENTARY_RANGE) {
        return ColorHarmony::Complementary;
    }
    if in_range(avg, classify::ANALOGOUS_RANGE) {
        return ColorHarmony::Analogous;
    }

    for (i, &a) in hues.iter().enumerate() {
        for &b in &hues[i + 1..] {
            if in_range(hue_distance(a, b), classify::TRIADIC_RANGE) {
                return ColorHarmony::Triadic;
            }
        }
    }

    ColorHarmony::Custom
}

/// Bucket the set's average lightness into light/dark/mixed
pub fn classify_brightness(colors: &[ExtractedColor]) -> Brightness {
    if colors.is_empty() {
        return Brightness::Mixed;
    }
    let avg = colors.iter().map(|c| c.hsl.l).sum::<f32>() / colors.len() as f32;
    if avg < classify::DARK_MAX_LIGHTNESS {
        Brightness::Dark
    } else if avg > classify::LIGHT_MIN_LIGHTNESS {
        Brightness::Light
    } else {
        Brightness::Mixed
    }
}

/// Bucket the set's average saturation into vibrant/muted/mixed
pub fn classify_saturation(colors: &[ExtractedColor]) -> Saturation {
    if colors.is_empty() {
        return Saturation::Mixed;
    }
    let avg = colors.iter().map(|c| c.hsl.s).sum::<f32>() / colors.len() as f32;
    if avg > classify::VIBRANT_MIN_SATURATION {
        Saturation::Vibrant
    } else if avg < classify::MUTED_MAX_SATURATION {
        Saturation::Muted
    } else {
        Saturation::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(h: f32, s: f32, l: f32) -> ExtractedColor {
        let (r, g, b) = crate::color::hsl_to_rgb(h, s, l);
        ExtractedColor::from_rgb(r, g, b, 0.1)
    }

    #[test]
    fn test_single_color_is_monochromatic() {
        assert_eq!(
            classify_harmony(&[color(240.0, 100.0, 50.0)]),
            ColorHarmony::Monochromatic
        );
        assert_eq!(classify_harmony(&[]), ColorHarmony::Monochromatic);
    }

    #[test]
    fn test_tight_hues_are_monochromatic() {
        let colors = vec![
            color(200.0, 80.0, 50.0),
            color(210.0, 70.0, 40.0),
            color(215.0, 60.0, 60.0),
        ];
        assert_eq!(classify_harmony(&colors), ColorHarmony::Monochromatic);
    }

    #[test]
    fn test_opposed_hues_are_complementary() {
        let colors = vec![color(30.0, 80.0, 50.0), color(210.0, 80.0, 50.0)];
        assert_eq!(classify_harmony(&colors), ColorHarmony::Complementary);
    }

    #[test]
    fn test_neighboring_hues_are_analogous() {
        let colors = vec![
            color(10.0, 80.0, 50.0),
            color(50.0, 80.0, 50.0),
            color(55.0, 80.0, 50.0),
        ];
        assert_eq!(classify_harmony(&colors), ColorHarmony::Analogous);
    }

    #[test]
    fn test_triadic_detected_pairwise() {
        // Averages miss every earlier band, but 0 and 120 are 120 apart
        let colors = vec![
            color(0.0, 80.0, 50.0),
            color(120.0, 80.0, 50.0),
            color(200.0, 80.0, 50.0),
        ];
        assert_eq!(classify_harmony(&colors), ColorHarmony::Triadic);
    }

    #[test]
    fn test_scattered_hues_are_custom() {
        let colors = vec![
            color(0.0, 80.0, 50.0),
            color(80.0, 80.0, 50.0),
            color(170.0, 80.0, 50.0),
        ];
        assert_eq!(classify_harmony(&colors), ColorHarmony::Custom);
    }

    #[test]
    fn test_harmony_samples_first_five_hues() {
        // A sixth, far-off hue must not affect classification
        let mut colors = vec![color(200.0, 80.0, 50.0); 5];
        colors.push(color(20.0, 80.0, 50.0));
        assert_eq!(classify_harmony(&colors), ColorHarmony::Monochromatic);
    }

    #[test]
    fn test_brightness_buckets() {
        assert_eq!(
            classify_brightness(&[color(0.0, 50.0, 20.0), color(120.0, 50.0, 30.0)]),
            Brightness::Dark
        );
        assert_eq!(
            classify_brightness(&[color(0.0, 50.0, 80.0), color(120.0, 50.0, 70.0)]),
            Brightness::Light
        );
        assert_eq!(
            classify_brightness(&[color(0.0, 50.0, 20.0), color(120.0, 50.0, 80.0)]),
            Brightness::Mixed
        );
    }

    #[test]
    fn test_saturation_buckets() {
        assert_eq!(
            classify_saturation(&[color(0.0, 90.0, 50.0), color(120.0, 80.0, 50.0)]),
            Saturation::Vibrant
        );
        assert_eq!(
            classify_saturation(&[color(0.0, 15.0, 50.0), color(120.0, 20.0, 50.0)]),
            Saturation::Muted
        );
        assert_eq!(
            classify_saturation(&[color(0.0, 90.0, 50.0), color(120.0, 10.0, 50.0)]),
            Saturation::Mixed
        );
    }
}
