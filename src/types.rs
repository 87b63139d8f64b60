//! Core color value types.
//!
//! [`Rgb`] is the canonical representation; every conversion routes through it.
//! [`Hsl`] and [`Cmyk`] hold the integer values shown to users, so each one is
//! rounded when it is created. [`HexColor`] is the textual form of an [`Rgb`].

use crate::num::{round_clamped, round_degrees, sqrt};
use crate::{BLACK, WHITE};
use core::fmt::{self, Write};
use heapless::String;
use palette::Srgb;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks a `0xRRGGBB` literal. Bits above the low 24 are ignored.
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Packs the channels into `0xRRGGBB`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Creates a color from arbitrary channel values.
    ///
    /// Each channel is rounded to the nearest integer and clamped to `0..=255`.
    /// NaN becomes 0.
    pub fn clamped(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Converts to a floating point `Srgb` in the 0.0-1.0 range.
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Quantizes a floating point `Srgb`, clamping out-of-gamut components.
    pub fn from_srgb(color: Srgb) -> Self {
        Self::clamped(
            color.red as f64 * 255.0,
            color.green as f64 * 255.0,
            color.blue as f64 * 255.0,
        )
    }

    /// Squared Euclidean distance in RGB space.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        sqrt(self.distance_squared(other) as f64)
    }

    /// Perceived brightness in `0.0..=1.0` (Rec. 601 luma weights).
    pub fn luminance(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn contrast_text(self) -> Rgb {
        if self.luminance() > 0.5 { BLACK } else { WHITE }
    }
}

#[inline]
fn channel(value: f64) -> u8 {
    round_clamped(value, 0.0, 255.0) as u8
}

#[inline]
fn percent(value: f64) -> u8 {
    round_clamped(value, 0.0, 100.0) as u8
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A color in the HSL model, with integer components.
///
/// Hue is in degrees `0..360`, saturation and lightness are percentages `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

impl Hsl {
    /// Creates an HSL color. Hue wraps modulo 360; saturation and lightness
    /// clamp to 100.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Creates an HSL color from arbitrary values, rounding each one.
    pub fn clamped(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: round_degrees(h) as u16,
            s: percent(s),
            l: percent(l),
        }
    }

    /// Hue in degrees.
    #[inline]
    pub const fn hue(self) -> u16 {
        self.h
    }

    /// Saturation percentage.
    #[inline]
    pub const fn saturation(self) -> u8 {
        self.s
    }

    /// Lightness percentage.
    #[inline]
    pub const fn lightness(self) -> u8 {
        self.l
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// A color in the CMYK model, as integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cmyk {
    c: u8,
    m: u8,
    y: u8,
    k: u8,
}

impl Cmyk {
    /// Creates a CMYK color, clamping each component to 100.
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        const fn pct(v: u8) -> u8 {
            if v > 100 { 100 } else { v }
        }
        Self {
            c: pct(c),
            m: pct(m),
            y: pct(y),
            k: pct(k),
        }
    }

    /// Creates a CMYK color from arbitrary values, rounding each one.
    pub fn clamped(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self {
            c: percent(c),
            m: percent(m),
            y: percent(y),
            k: percent(k),
        }
    }

    /// Cyan percentage.
    #[inline]
    pub const fn cyan(self) -> u8 {
        self.c
    }

    /// Magenta percentage.
    #[inline]
    pub const fn magenta(self) -> u8 {
        self.m
    }

    /// Yellow percentage.
    #[inline]
    pub const fn yellow(self) -> u8 {
        self.y
    }

    /// Key (black) percentage.
    #[inline]
    pub const fn key(self) -> u8 {
        self.k
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

/// Lowercase `#rrggbb` text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String<7>);

impl HexColor {
    /// Returns the hex text, always 7 characters.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decodes back into RGB.
    pub fn to_rgb(&self) -> Rgb {
        // Only built from an Rgb, so the digits are always well formed.
        let packed = u32::from_str_radix(&self.as_str()[1..], 16).unwrap_or(0);
        Rgb::from_u32(packed)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        let mut text = String::new();
        // '#' plus six digits always fits.
        let _ = write!(text, "#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b);
        HexColor(text)
    }
}

impl From<&HexColor> for Rgb {
    fn from(hex: &HexColor) -> Self {
        hex.to_rgb()
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HexColor {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// Color conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Input is not six hex digits with an optional leading `#`.
    InvalidFormat,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidFormat => {
                write!(f, "invalid hex color: expected 6 hex digits with an optional leading '#'")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}
