//! Two-color gradients.
//!
//! A [`Gradient`] describes a CSS gradient between two colors. It renders to a
//! CSS value through `Display`, to Tailwind utility classes through
//! [`Gradient::tailwind_classes`], and can be sampled at any position.
//!
//! Interpolation happens in sRGB, the same space browsers use by default for
//! CSS gradients.

use crate::catalog::Catalog;
use crate::types::{HexColor, Rgb};
use core::fmt;
use heapless::Vec;
use palette::Mix;

/// Gradient shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GradientKind {
    /// Straight line at an angle.
    #[default]
    Linear,
    /// Circle from the center outward.
    Radial,
    /// Sweep around the center, starting at an angle.
    Conic,
}

/// A two-color gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gradient {
    start: Rgb,
    end: Rgb,
    kind: GradientKind,
    direction: u16,
    stops: (u8, u8),
}

impl Gradient {
    /// Creates a linear gradient at 45 degrees with stops at 0% and 100%.
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self {
            start,
            end,
            kind: GradientKind::Linear,
            direction: 45,
            stops: (0, 100),
        }
    }

    /// Sets the gradient shape.
    pub const fn kind(mut self, kind: GradientKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the direction in degrees, wrapped modulo 360.
    ///
    /// Used by linear and conic gradients.
    pub const fn direction(mut self, degrees: u16) -> Self {
        self.direction = degrees % 360;
        self
    }

    /// Sets the start and end stop positions, as percentages clamped to 100.
    pub const fn stops(mut self, start: u8, end: u8) -> Self {
        const fn pct(v: u8) -> u8 {
            if v > 100 { 100 } else { v }
        }
        self.stops = (pct(start), pct(end));
        self
    }

    /// Same gradient with start and end colors exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            ..self
        }
    }

    /// Start color.
    #[inline]
    pub const fn start(&self) -> Rgb {
        self.start
    }

    /// End color.
    #[inline]
    pub const fn end(&self) -> Rgb {
        self.end
    }

    /// Gradient shape.
    #[inline]
    pub const fn shape(&self) -> GradientKind {
        self.kind
    }

    /// Direction in degrees.
    #[inline]
    pub const fn angle(&self) -> u16 {
        self.direction
    }

    /// Start and end stop percentages.
    #[inline]
    pub const fn stop_positions(&self) -> (u8, u8) {
        self.stops
    }

    /// Color at `position` along the gradient (0.0 = start edge, 1.0 = end edge).
    ///
    /// Positions before the first stop take the start color, positions after
    /// the last stop take the end color.
    pub fn color_at(&self, position: f32) -> Rgb {
        let position = if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) };
        let first = self.stops.0 as f32 / 100.0;
        let last = self.stops.1 as f32 / 100.0;

        let progress = if last <= first {
            if position < first { 0.0 } else { 1.0 }
        } else {
            ((position - first) / (last - first)).clamp(0.0, 1.0)
        };

        Rgb::from_srgb(self.start.to_srgb().mix(self.end.to_srgb(), progress))
    }

    /// `N` colors evenly spaced from the start edge to the end edge.
    pub fn sample<const N: usize>(&self) -> Vec<Rgb, N> {
        let mut colors = Vec::new();
        for i in 0..N {
            let position = if N > 1 { i as f32 / (N - 1) as f32 } else { 0.0 };
            // Exactly N pushes.
            let _ = colors.push(self.color_at(position));
        }
        colors
    }

    /// Tailwind utility classes approximating this gradient.
    ///
    /// Colors are snapped to their nearest swatch in `catalog`.
    pub fn tailwind_classes(&self, catalog: &Catalog) -> TailwindGradient {
        let from = catalog.find_closest(self.start);
        let to = catalog.find_closest(self.end);
        TailwindGradient {
            direction: tailwind_direction(self.direction),
            from: (from.family, from.shade.as_str()),
            to: (to.family, to.shade.as_str()),
        }
    }
}

/// Maps the eight 45-degree directions to Tailwind classes; anything else
/// falls back to left-to-right.
fn tailwind_direction(degrees: u16) -> &'static str {
    match degrees {
        0 => "bg-gradient-to-t",
        45 => "bg-gradient-to-tr",
        90 => "bg-gradient-to-r",
        135 => "bg-gradient-to-br",
        180 => "bg-gradient-to-b",
        225 => "bg-gradient-to-bl",
        270 => "bg-gradient-to-l",
        315 => "bg-gradient-to-tl",
        _ => "bg-gradient-to-r",
    }
}

/// Renders the CSS value, e.g. `linear-gradient(45deg, #3b82f6 0%, #8b5cf6 100%)`.
impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = HexColor::from(self.start);
        let end = HexColor::from(self.end);
        let (first, last) = self.stops;

        match self.kind {
            GradientKind::Linear => write!(f, "linear-gradient({}deg, ", self.direction)?,
            GradientKind::Radial => f.write_str("radial-gradient(circle, ")?,
            GradientKind::Conic => write!(f, "conic-gradient(from {}deg, ", self.direction)?,
        }
        write!(f, "{} {}%, {} {}%)", start, first, end, last)
    }
}

/// Tailwind classes for a gradient, e.g. `bg-gradient-to-tr from-blue-500 to-violet-500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailwindGradient {
    direction: &'static str,
    from: (&'static str, &'static str),
    to: (&'static str, &'static str),
}

impl fmt::Display for TailwindGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from-{}-{} to-{}-{}",
            self.direction, self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// A named starting point for gradient editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPreset {
    /// Display name.
    pub name: &'static str,
    /// Start color.
    pub start: Rgb,
    /// End color.
    pub end: Rgb,
    /// Direction in degrees.
    pub direction: u16,
}

impl GradientPreset {
    /// Linear gradient for this preset.
    pub const fn gradient(&self) -> Gradient {
        Gradient::new(self.start, self.end).direction(self.direction)
    }
}

/// Built-in presets.
pub const PRESETS: [GradientPreset; 8] = [
    preset("Sunset", 0xff7e5f, 0xfeb47b, 45),
    preset("Ocean", 0x2e3192, 0x1bffff, 45),
    preset("Forest", 0x134e5e, 0x71b280, 135),
    preset("Purple Rain", 0x8b2ac0, 0xf15bb5, 90),
    preset("Sunrise", 0xffb75e, 0xed8f03, 0),
    preset("Midnight", 0x232526, 0x414345, 180),
    preset("Cherry", 0xeb3349, 0xf45c43, 45),
    preset("Emerald", 0x348f50, 0x56b4d3, 135),
];

const fn preset(name: &'static str, start: u32, end: u32, direction: u16) -> GradientPreset {
    GradientPreset {
        name,
        start: Rgb::from_u32(start),
        end: Rgb::from_u32(end),
        direction,
    }
}
