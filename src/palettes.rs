//! Curated color palettes.
//!
//! [`PALETTES`] holds twelve five-color palettes grouped into four
//! [`PaletteCategory`] values. Each palette renders to the three formats a
//! designer pastes elsewhere through [`ColorPalette::export`]:
//!
//! ```text
//! #ff6b6b, #ffe66d, #ff8e53, #c7ceea, #6bcf7f
//!
//! /* Modern Sunset */
//! :root {
//!   --color-1: #ff6b6b;
//!   ...
//! }
//!
//! // Modern Sunset
//! colors: {
//!   'palette-1': '#ff6b6b',
//!   ...
//! }
//! ```

use crate::types::{HexColor, Rgb};
use core::fmt;
use heapless::Vec;

/// Colors in every curated palette.
pub const PALETTE_SIZE: usize = 5;

/// Number of curated palettes.
pub const PALETTE_COUNT: usize = 12;

/// Palette grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaletteCategory {
    /// Currently popular combinations.
    Trending,
    /// Restrained schemes for clean layouts.
    Minimalist,
    /// Bright, high-energy schemes.
    Vibrant,
    /// Schemes taken from natural scenery.
    Nature,
}

impl PaletteCategory {
    /// All categories, in display order.
    pub const ALL: [PaletteCategory; 4] = [
        PaletteCategory::Trending,
        PaletteCategory::Minimalist,
        PaletteCategory::Vibrant,
        PaletteCategory::Nature,
    ];

    /// Section title.
    pub const fn name(self) -> &'static str {
        match self {
            PaletteCategory::Trending => "Trending",
            PaletteCategory::Minimalist => "Minimalist",
            PaletteCategory::Vibrant => "Vibrant",
            PaletteCategory::Nature => "Nature",
        }
    }

    /// One-line section description.
    pub const fn description(self) -> &'static str {
        match self {
            PaletteCategory::Trending => "The most popular palettes right now",
            PaletteCategory::Minimalist => "Elegance and simplicity for clean designs",
            PaletteCategory::Vibrant => "Bright, energetic colors for bold projects",
            PaletteCategory::Nature => "Inspired by natural and organic colors",
        }
    }

    /// Palettes in this category, in declaration order.
    pub fn palettes(self) -> impl Iterator<Item = &'static ColorPalette> + use<> {
        PALETTES.iter().filter(move |palette| palette.category == self)
    }
}

/// A named, fixed set of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorPalette {
    /// Stable identifier, e.g. `"ocean-breeze"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Grouping.
    pub category: PaletteCategory,
    /// Colors, in display order.
    pub colors: [Rgb; PALETTE_SIZE],
    /// Search keywords.
    pub tags: [&'static str; 3],
}

impl ColorPalette {
    /// True when one of the tags equals `tag`, ignoring ASCII case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Hex text of each color.
    pub fn hex_colors(&self) -> Vec<HexColor, PALETTE_SIZE> {
        self.colors.iter().map(|&rgb| HexColor::from(rgb)).collect()
    }

    /// Renders the palette in `format` through `Display`.
    #[inline]
    pub const fn export(&self, format: ExportFormat) -> PaletteExport<'_> {
        PaletteExport {
            palette: self,
            format,
        }
    }
}

/// Text formats a palette can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExportFormat {
    /// Comma-separated hex values.
    Hex,
    /// A `:root` block of `--color-N` custom properties.
    Css,
    /// A Tailwind `colors` block with `palette-N` keys.
    Tailwind,
}

/// A palette rendered in one export format.
#[derive(Debug, Clone, Copy)]
pub struct PaletteExport<'a> {
    palette: &'a ColorPalette,
    format: ExportFormat,
}

impl fmt::Display for PaletteExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = self.palette;
        let colors = palette.colors.iter().map(|&rgb| HexColor::from(rgb));

        match self.format {
            ExportFormat::Hex => {
                for (i, hex) in colors.enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", hex)?;
                }
                Ok(())
            }
            ExportFormat::Css => {
                writeln!(f, "/* {} */", palette.name)?;
                writeln!(f, ":root {{")?;
                for (i, hex) in colors.enumerate() {
                    writeln!(f, "  --color-{}: {};", i + 1, hex)?;
                }
                f.write_str("}")
            }
            ExportFormat::Tailwind => {
                writeln!(f, "// {}", palette.name)?;
                writeln!(f, "colors: {{")?;
                for (i, hex) in colors.enumerate() {
                    writeln!(f, "  'palette-{}': '{}',", i + 1, hex)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Finds a curated palette by id.
pub fn find(id: &str) -> Option<&'static ColorPalette> {
    PALETTES.iter().find(|palette| palette.id == id)
}

/// Curated palettes that carry `tag`.
pub fn tagged<'a>(tag: &'a str) -> impl Iterator<Item = &'static ColorPalette> + use<'a> {
    PALETTES.iter().filter(move |palette| palette.has_tag(tag))
}

/// Palettes the user marked, in the order they were marked.
///
/// Only ids from [`PALETTES`] are accepted, so the set never overflows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<&'static str, PALETTE_COUNT>,
}

impl Favorites {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Marks or unmarks a palette.
    ///
    /// Returns `Some(true)` if the palette is now a favorite, `Some(false)` if
    /// it was removed, and `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let palette = find(id)?;
        if let Some(pos) = self.ids.iter().position(|&known| known == palette.id) {
            self.ids.remove(pos);
            return Some(false);
        }
        // Ids are unique and come from PALETTES, so there is always room.
        let _ = self.ids.push(palette.id);
        Some(true)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|&known| known == id)
    }

    /// Favorite palettes, oldest first.
    pub fn palettes(&self) -> impl Iterator<Item = &'static ColorPalette> + '_ {
        self.ids.iter().filter_map(|&id| find(id))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Built-in palettes, grouped by category.
pub static PALETTES: [ColorPalette; PALETTE_COUNT] = [
    palette(
        "modern-sunset",
        "Modern Sunset",
        "Warm palette inspired by city sunsets",
        PaletteCategory::Trending,
        [0xff6b6b, 0xffe66d, 0xff8e53, 0xc7ceea, 0x6bcf7f],
        ["modern", "warm", "vibrant"],
    ),
    palette(
        "ocean-breeze",
        "Ocean Breeze",
        "The calm freshness of deep water",
        PaletteCategory::Trending,
        [0x006ba6, 0x0496ff, 0xffbc42, 0xd81159, 0x8f2d56],
        ["fresh", "ocean", "professional"],
    ),
    palette(
        "forest-harmony",
        "Forest Harmony",
        "Soothing natural tones of the forest",
        PaletteCategory::Trending,
        [0x2d5016, 0x61892f, 0x86c232, 0xc5e1a5, 0xf8ffe5],
        ["natural", "soothing", "organic"],
    ),
    palette(
        "mono-elegance",
        "Monochrome Elegance",
        "Black and white sophistication with subtle steps",
        PaletteCategory::Minimalist,
        [0x000000, 0x333333, 0x666666, 0xcccccc, 0xffffff],
        ["minimal", "elegant", "timeless"],
    ),
    palette(
        "soft-pastels",
        "Soft Pastels",
        "Gentle, subtle tones for delicate designs",
        PaletteCategory::Minimalist,
        [0xf8f4f0, 0xe8ddd4, 0xd0b8a8, 0xa8918b, 0x8b7d77],
        ["pastel", "soft", "delicate"],
    ),
    palette(
        "clean-corporate",
        "Clean Corporate",
        "Professional palette for modern companies",
        PaletteCategory::Minimalist,
        [0x1a237e, 0x3949ab, 0x5c6bc0, 0x9fa8da, 0xe8eaf6],
        ["professional", "corporate", "reliable"],
    ),
    palette(
        "neon-nights",
        "Neon Nights",
        "Electric energy of the city at night",
        PaletteCategory::Vibrant,
        [0xff0080, 0x7928ca, 0x0070f3, 0x00dfd8, 0x7fff00],
        ["neon", "electric", "modern"],
    ),
    palette(
        "tropical-paradise",
        "Tropical Paradise",
        "Bright colors of tropical islands",
        PaletteCategory::Vibrant,
        [0xff6b35, 0xf7931e, 0xffd23f, 0x06ffa5, 0x4ecdc4],
        ["tropical", "bright", "exotic"],
    ),
    palette(
        "retro-wave",
        "Retro Wave",
        "Eighties nostalgia in color",
        PaletteCategory::Vibrant,
        [0xff006e, 0x8338ec, 0x3a86ff, 0x06ffa5, 0xffbe0b],
        ["retro", "80s", "synthwave"],
    ),
    palette(
        "autumn-leaves",
        "Autumn Leaves",
        "Rich, warm colors of the fall",
        PaletteCategory::Nature,
        [0x8b4513, 0xcd853f, 0xdaa520, 0xb22222, 0x228b22],
        ["autumn", "natural", "warm"],
    ),
    palette(
        "spring-bloom",
        "Spring Bloom",
        "Fresh colors of spring renewal",
        PaletteCategory::Nature,
        [0x98fb98, 0x90ee90, 0xffb6c1, 0xf0e68c, 0xdda0dd],
        ["spring", "floral", "fresh"],
    ),
    palette(
        "mountain-peak",
        "Mountain Peak",
        "Majesty and purity of high mountains",
        PaletteCategory::Nature,
        [0x2f4f4f, 0x708090, 0xb0c4de, 0xf5f5dc, 0xfffafa],
        ["mountain", "majestic", "pure"],
    ),
];

const fn palette(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: PaletteCategory,
    colors: [u32; PALETTE_SIZE],
    tags: [&'static str; 3],
) -> ColorPalette {
    let mut rgb = [Rgb::new(0, 0, 0); PALETTE_SIZE];
    let mut i = 0;
    while i < PALETTE_SIZE {
        rgb[i] = Rgb::from_u32(colors[i]);
        i += 1;
    }
    ColorPalette {
        id,
        name,
        description,
        category,
        colors: rgb,
        tags,
    }
}
