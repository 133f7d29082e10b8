//! Coarse human-readable color names
//!
//! Names combine a lightness qualifier with a hue family, e.g.
//! "Dark Blue" or "Light Orange". This is a display label for reports,
//! not a colorimetric classification.

/// Derive a coarse name from HSL components
pub fn color_name(h: f32, s: f32, l: f32) -> String {
    if s < 10.0 {
        return match l {
            l if l < 25.0 => "Dark Gray".to_string(),
            l if l > 75.0 => "Light Gray".to_string(),
            _ => "Gray".to_string(),
        };
    }

    let family = hue_family(h);
    match l {
        l if l < 25.0 => format!("Dark {}", family),
        l if l > 75.0 => format!("Light {}", family),
        _ => family.to_string(),
    }
}

fn hue_family(h: f32) -> &'static str {
    match h {
        h if h < 15.0 => "Red",
        h if h < 45.0 => "Orange",
        h if h < 70.0 => "Yellow",
        h if h < 160.0 => "Green",
        h if h < 200.0 => "Cyan",
        h if h < 250.0 => "Blue",
        h if h < 290.0 => "Purple",
        h if h < 335.0 => "Pink",
        _ => "Red",
    }
}
