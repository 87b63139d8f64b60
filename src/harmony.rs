//! Color harmony generation.
//!
//! Harmonies rotate the base hue around the color wheel by fixed angles. The
//! first color is always the base itself; the others use the configured
//! saturation and lightness, so a whole scheme can be toned up or down at once.

use crate::colors::{hsl_to_rgb, rgb_to_hsl};
use crate::types::{Hsl, Rgb};
use heapless::Vec;

/// Largest number of colors any harmony produces.
pub const MAX_HARMONY_COLORS: usize = 4;

/// A harmony scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Harmony {
    /// Base plus its opposite.
    Complementary,
    /// Three hues 120 degrees apart.
    Triadic,
    /// Base plus two neighbors 30 degrees apart.
    Analogous,
    /// Base plus the two neighbors of its complement.
    SplitComplementary,
    /// Four hues forming a rectangle on the wheel.
    Tetradic,
    /// One hue at different saturation and lightness.
    Monochromatic,
}

impl Harmony {
    /// All schemes.
    pub const ALL: [Harmony; 6] = [
        Harmony::Complementary,
        Harmony::Triadic,
        Harmony::Analogous,
        Harmony::SplitComplementary,
        Harmony::Tetradic,
        Harmony::Monochromatic,
    ];

    /// Hue offsets in degrees, one per generated color.
    pub const fn angles(self) -> &'static [u16] {
        match self {
            Harmony::Complementary => &[0, 180],
            Harmony::Triadic => &[0, 120, 240],
            Harmony::Analogous => &[0, 30, 60],
            Harmony::SplitComplementary => &[0, 150, 210],
            Harmony::Tetradic => &[0, 60, 180, 240],
            Harmony::Monochromatic => &[0, 0, 0, 0],
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Harmony::Complementary => "Complementary",
            Harmony::Triadic => "Triadic",
            Harmony::Analogous => "Analogous",
            Harmony::SplitComplementary => "Split complementary",
            Harmony::Tetradic => "Tetradic",
            Harmony::Monochromatic => "Monochromatic",
        }
    }
}

/// Saturation and lightness applied to generated colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HarmonySettings {
    /// Saturation percentage, clamped to 100.
    pub saturation: u8,
    /// Lightness percentage, clamped to 100.
    pub lightness: u8,
}

impl Default for HarmonySettings {
    fn default() -> Self {
        Self {
            saturation: 70,
            lightness: 50,
        }
    }
}

// (saturation factor, lightness factor) per monochromatic slot; `None` is the base.
const MONOCHROMATIC_STEPS: [Option<(f64, f64)>; MAX_HARMONY_COLORS] = [
    Some((0.3, 0.4)),
    Some((0.7, 0.7)),
    None,
    Some((1.2, 1.3)),
];

/// Generates the colors of `harmony` around `base`.
///
/// Index 0 is `base` for every scheme except [`Harmony::Monochromatic`],
/// which orders its colors dark to light with the base in the middle.
pub fn generate(base: Rgb, harmony: Harmony, settings: HarmonySettings) -> Vec<Rgb, MAX_HARMONY_COLORS> {
    let hue = rgb_to_hsl(base).hue() as f64;
    let saturation = settings.saturation as f64;
    let lightness = settings.lightness as f64;

    let mut colors = Vec::new();

    if harmony == Harmony::Monochromatic {
        for step in MONOCHROMATIC_STEPS {
            let color = match step {
                Some((s, l)) => hsl_to_rgb(Hsl::clamped(hue, saturation * s, lightness * l)),
                None => base,
            };
            // At most MAX_HARMONY_COLORS entries.
            let _ = colors.push(color);
        }
        return colors;
    }

    for (index, &angle) in harmony.angles().iter().enumerate() {
        let color = if index == 0 {
            base
        } else {
            hsl_to_rgb(Hsl::clamped(hue + angle as f64, saturation, lightness))
        };
        let _ = colors.push(color);
    }

    colors
}
