#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb`**: Canonical 8-bit color; every conversion routes through it
//! - **`Hsl`** / **`Cmyk`**: Integer display models, rounded when created
//! - **`HexColor`**: Lowercase `#rrggbb` text
//! - **`colors`**: `hex_to_rgb`, `rgb_to_hex`, `rgb_to_hsl`, `hsl_to_rgb`, `rgb_to_cmyk`, `cmyk_to_rgb`
//! - **`parse_strict`** / **`parse_partial`**: Hex parsing for APIs and for live text fields
//! - **`Catalog`**: Immutable table of named swatches (Tailwind CSS built in)
//! - **`Match`**: Result of a nearest-swatch lookup
//! - **`Converter`**: Keeps four formats, nearest swatch and history in sync while editing
//! - **`Harmony`** / **`Gradient`**: Scheme and gradient generation on top of the conversions
//! - **`PALETTES`**: Curated five-color palettes with hex, CSS and Tailwind export
//!
//! Out-of-range numeric input is clamped, never rejected. Malformed hex text is
//! the only error condition.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod num;

pub mod types;
pub mod parse;
pub mod colors;
pub mod catalog;
pub mod matcher;
pub mod input;
pub mod converter;
pub mod harmony;
pub mod gradient;
pub mod palettes;
mod tailwind;

pub use types::{Cmyk, ColorError, HexColor, Hsl, Rgb};
pub use parse::{HexInput, parse_partial, parse_strict};
pub use colors::{cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl};
pub use catalog::{Catalog, CatalogError, Family, Shade, Swatch};
pub use matcher::{Match, find_closest};
pub use input::ColorInput;
pub use converter::{ColorSnapshot, Converter, HISTORY_CAPACITY, Update};
pub use harmony::{Harmony, HarmonySettings, MAX_HARMONY_COLORS};
pub use gradient::{Gradient, GradientKind, GradientPreset, TailwindGradient, PRESETS};
pub use palettes::{
    ColorPalette, ExportFormat, Favorites, PALETTES, PaletteCategory, PaletteExport,
};

/// Tailwind emerald-500, the starting color of a new [`Converter`].
pub const DEFAULT_COLOR: Rgb = Rgb::from_u32(0x10b981);

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
