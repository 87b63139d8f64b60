//! Conversions between HEX, RGB, HSL and CMYK.
//!
//! Every conversion routes through [`Rgb`]. Math is done in `f64` and each
//! result is rounded once, when it becomes one of the named types. Chained
//! conversions therefore see the rounded integers, so an RGB -> HSL -> RGB
//! round trip can drift by a few units per channel (at most 5; CMYK at most 2).

use crate::parse::parse_strict;
use crate::types::{Cmyk, ColorError, HexColor, Hsl, Rgb};

/// Parses `#rrggbb` or `rrggbb` (any case) into RGB.
///
/// # Errors
/// * `InvalidFormat` - Input does not match `^#?[0-9A-Fa-f]{6}$`
#[inline]
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    parse_strict(hex)
}

/// Formats RGB as lowercase `#rrggbb`.
#[inline]
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    HexColor::from(rgb)
}

/// Converts RGB to HSL.
///
/// Achromatic colors (all channels equal) have hue and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::clamped(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    // Red wins ties, then green.
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::clamped(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Converts HSL to RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.hue() as f64 / 360.0;
    let s = hsl.saturation() as f64 / 100.0;
    let l = hsl.lightness() as f64 / 100.0;

    if hsl.saturation() == 0 {
        let v = l * 255.0;
        return Rgb::clamped(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::clamped(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// One channel of the piecewise HSL -> RGB curve; `t` is a hue offset in turns.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts RGB to CMYK.
///
/// Pure black has no chroma to decompose: it maps to `cmyk(0%, 0%, 0%, 100%)`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    if rgb.r.max(rgb.g).max(rgb.b) == 0 {
        return Cmyk::new(0, 0, 0, 100);
    }

    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let k = 1.0 - r.max(g).max(b);
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    Cmyk::clamped(c * 100.0, m * 100.0, y * 100.0, k * 100.0)
}

/// Converts CMYK to RGB.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let c = cmyk.cyan() as f64 / 100.0;
    let m = cmyk.magenta() as f64 / 100.0;
    let y = cmyk.yellow() as f64 / 100.0;
    let k = cmyk.key() as f64 / 100.0;

    Rgb::clamped(
        255.0 * (1.0 - c) * (1.0 - k),
        255.0 * (1.0 - m) * (1.0 - k),
        255.0 * (1.0 - y) * (1.0 - k),
    )
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        rgb_to_cmyk(rgb)
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        cmyk_to_rgb(cmyk)
    }
}

impl core::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}
