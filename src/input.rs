//! Raw edits coming from a color editor.

/// A value typed into one of the four color fields.
///
/// Numeric fields carry raw `f64` values so half-typed or out-of-range input
/// (e.g. `-3`, `300`, `12.5`) can be clamped instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput<'a> {
    /// Hex text, possibly incomplete.
    Hex(&'a str),
    /// RGB channels, clamped to `0..=255`.
    Rgb { r: f64, g: f64, b: f64 },
    /// Hue in degrees (wrapped), saturation and lightness clamped to `0..=100`.
    Hsl { h: f64, s: f64, l: f64 },
    /// CMYK percentages, clamped to `0..=100`.
    Cmyk { c: f64, m: f64, y: f64, k: f64 },
}

impl ColorInput<'_> {
    /// Name of the edited field.
    pub const fn format(&self) -> &'static str {
        match self {
            ColorInput::Hex(_) => "hex",
            ColorInput::Rgb { .. } => "rgb",
            ColorInput::Hsl { .. } => "hsl",
            ColorInput::Cmyk { .. } => "cmyk",
        }
    }
}
