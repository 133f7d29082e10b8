//! Tuning constants and fixed product colors for the extraction engine
//!
//! Thresholds here are preserved contracts of the palette pipeline:
//! changing one changes observable output, so treat edits as behavior
//! changes rather than cleanups.

/// Pixel quantization parameters
pub mod quantize {
    /// Default quantization bucket size (channel values floored to multiples)
    pub const DEFAULT_BUCKET_SIZE: u32 = 16;

    /// Pixels with mean channel value below this are discarded as near-black
    pub const DISCARD_MEAN_LOW: f32 = 10.0;

    /// Pixels with mean channel value above this are discarded as near-white
    pub const DISCARD_MEAN_HIGH: f32 = 245.0;
}

/// Canonical sampling canvas
pub mod canvas {
    /// Square canvas edge in pixels; sources are cover-cropped onto it
    pub const DEFAULT_SIZE: u32 = 100;
}

/// Dominant-color selection parameters
pub mod selection {
    /// Default number of dominant colors to select
    pub const DEFAULT_MAX_COLORS: usize = 10;

    /// Candidate pool size as a multiple of the target count
    pub const POOL_FACTOR: usize = 2;

    /// Minimum circular hue separation (degrees) for the diversity filter
    pub const MIN_HUE_DISTANCE: f32 = 30.0;

    /// Minimum lightness separation for the diversity filter
    pub const MIN_LIGHTNESS_DISTANCE: f32 = 20.0;
}

/// Harmony, brightness and saturation classification thresholds
pub mod classify {
    /// Number of leading colors whose hues feed harmony classification
    pub const HUE_SAMPLE: usize = 5;

    /// Average hue spread below this is monochromatic (degrees)
    pub const MONOCHROMATIC_MAX: f32 = 30.0;

    /// Average hue spread range for complementary palettes (degrees)
    pub const COMPLEMENTARY_RANGE: (f32, f32) = (150.0, 210.0);

    /// Average hue spread range for analogous palettes (degrees)
    pub const ANALOGOUS_RANGE: (f32, f32) = (30.0, 60.0);

    /// Pairwise hue distance range marking a triadic relationship (degrees)
    pub const TRIADIC_RANGE: (f32, f32) = (110.0, 130.0);

    /// Average lightness below this is a dark palette
    pub const DARK_MAX_LIGHTNESS: f32 = 35.0;

    /// Average lightness above this is a light palette
    pub const LIGHT_MIN_LIGHTNESS: f32 = 65.0;

    /// Average saturation above this is vibrant
    pub const VIBRANT_MIN_SATURATION: f32 = 60.0;

    /// Average saturation below this is muted
    pub const MUTED_MAX_SATURATION: f32 = 30.0;
}

/// Palette role assignment parameters
pub mod synthesis {
    /// Hue distance range to primary qualifying a secondary as analogous
    pub const SECONDARY_ANALOGOUS: (f32, f32) = (30.0, 60.0);

    /// Hue distance range to primary qualifying a secondary as complementary
    pub const SECONDARY_COMPLEMENTARY: (f32, f32) = (150.0, 210.0);

    /// Minimum saturation for an accent candidate
    pub const ACCENT_MIN_SATURATION: f32 = 50.0;

    /// Average lightness below this selects the dark-theme neutrals
    pub const DARK_THEME_MAX_LIGHTNESS: f32 = 50.0;

    /// Relative luminance split deciding the light-theme text pair
    pub const TEXT_LUMINANCE_SPLIT: f32 = 0.5;

    /// Saturation used for derived light-theme neutrals
    pub const NEUTRAL_SATURATION: f32 = 10.0;

    /// Lightness of the derived light-theme background
    pub const BACKGROUND_LIGHTNESS: f32 = 98.0;

    /// Lightness of the derived light-theme surface
    pub const SURFACE_LIGHTNESS: f32 = 95.0;

    /// Cap on overflow colors carried beyond the named roles
    pub const ADDITIONAL_CAP: usize = 5;
}

/// Cross-image cluster merging parameters
pub mod merge {
    /// Maximum hue distance for folding a color into a cluster (degrees)
    pub const MAX_HUE_DISTANCE: f32 = 20.0;

    /// Maximum saturation distance for folding a color into a cluster
    pub const MAX_SATURATION_DISTANCE: f32 = 20.0;
}

/// Fixed product colors. These are design-token conventions, never
/// derived from input images, so contrast stays predictable.
pub mod theme {
    /// Status colors shared by every palette
    pub const SUCCESS: &str = "#10B981";
    pub const WARNING: &str = "#F59E0B";
    pub const ERROR: &str = "#EF4444";

    /// Dark-theme neutrals
    pub const DARK_BACKGROUND: &str = "#121212";
    pub const DARK_SURFACE: &str = "#1E1E1E";
    pub const DARK_TEXT: &str = "#F5F5F5";
    pub const DARK_TEXT_SECONDARY: &str = "#A3A3A3";

    /// Text pair used on light primaries (high luminance)
    pub const TEXT_ON_LIGHT: &str = "#1F2937";
    pub const TEXT_SECONDARY_ON_LIGHT: &str = "#4B5563";

    /// Text pair used on dark primaries (low luminance)
    pub const TEXT_ON_DARK: &str = "#F9FAFB";
    pub const TEXT_SECONDARY_ON_DARK: &str = "#E5E7EB";

    /// Default palette substituted when no usable color signal exists
    pub const DEFAULT_PRIMARY: &str = "#3B82F6";
    pub const DEFAULT_SECONDARY: &str = "#8B5CF6";
    pub const DEFAULT_ACCENT: &str = "#F59E0B";
    pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
    pub const DEFAULT_SURFACE: &str = "#F9FAFB";
    pub const DEFAULT_TEXT: &str = "#111827";
    pub const DEFAULT_TEXT_SECONDARY: &str = "#6B7280";
}
