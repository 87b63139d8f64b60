//! Named color catalogs.
//!
//! A [`Catalog`] is an immutable table of color families, each holding one
//! swatch per [`Shade`]. Iteration always follows declaration order (families
//! first, then shades within a family), and nearest-color lookups rely on that
//! order to break ties.

use crate::tailwind;
use crate::types::{HexColor, Rgb};
use core::fmt;

/// A shade step on the 50-950 lightness scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// All shades, lightest first.
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Numeric label, e.g. `500`.
    pub const fn value(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    /// Text label, e.g. `"500"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Shade::S50 => "50",
            Shade::S100 => "100",
            Shade::S200 => "200",
            Shade::S300 => "300",
            Shade::S400 => "400",
            Shade::S500 => "500",
            Shade::S600 => "600",
            Shade::S700 => "700",
            Shade::S800 => "800",
            Shade::S900 => "900",
            Shade::S950 => "950",
        }
    }

    /// Looks up a shade by its text label.
    pub fn from_label(label: &str) -> Option<Shade> {
        Shade::ALL.into_iter().find(|shade| shade.as_str() == label)
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named group of shades, e.g. `emerald`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    name: &'static str,
    swatches: &'static [(Shade, Rgb)],
}

impl Family {
    /// Creates a family. Shades are kept in the given order.
    pub const fn new(name: &'static str, swatches: &'static [(Shade, Rgb)]) -> Self {
        Self { name, swatches }
    }

    /// Family name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the color for a shade, if the family defines it.
    pub fn shade(&self, shade: Shade) -> Option<Rgb> {
        self.swatches
            .iter()
            .find(|(s, _)| *s == shade)
            .map(|&(_, rgb)| rgb)
    }

    /// Iterates swatches in declaration order.
    pub fn swatches(&self) -> impl Iterator<Item = Swatch> + use<> {
        let name = self.name;
        self.swatches
            .iter()
            .map(move |&(shade, rgb)| Swatch { family: name, shade, rgb })
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Swatch {
    /// Family name.
    pub family: &'static str,
    /// Shade within the family.
    pub shade: Shade,
    /// Swatch color.
    pub rgb: Rgb,
}

impl Swatch {
    /// Hex text for this swatch.
    pub fn hex(&self) -> HexColor {
        HexColor::from(self.rgb)
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family, self.shade)
    }
}

/// Catalog validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// No families provided.
    Empty,

    /// A family has no swatches.
    EmptyFamily(&'static str),

    /// Two families share a name.
    DuplicateFamily(&'static str),

    /// A family lists the same shade twice.
    DuplicateShade {
        family: &'static str,
        shade: Shade,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => {
                write!(f, "catalog must have at least one family")
            }
            CatalogError::EmptyFamily(name) => {
                write!(f, "family '{}' has no swatches", name)
            }
            CatalogError::DuplicateFamily(name) => {
                write!(f, "family '{}' is defined more than once", name)
            }
            CatalogError::DuplicateShade { family, shade } => {
                write!(f, "family '{}' defines shade {} more than once", family, shade)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CatalogError {}

/// An immutable, validated table of color families.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    families: &'static [Family],
    len: usize,
}

static TAILWIND: Catalog = Catalog::from_trusted(tailwind::FAMILIES);
static TAILWIND_COMPACT: Catalog = Catalog::from_trusted(tailwind::COMPACT_FAMILIES);

impl Catalog {
    /// The Tailwind CSS palette: 22 families with shades 50 through 950.
    #[inline]
    pub fn tailwind() -> &'static Catalog {
        &TAILWIND
    }

    /// A 193-swatch subset of [`Catalog::tailwind`]: 19 families without
    /// neutral, stone and sky, and shade 950 only for slate, gray and rose.
    ///
    /// Matches made against this table never name a family it lacks, so
    /// `#0ea5e9` (sky-500) resolves to cyan-500 instead.
    #[inline]
    pub fn tailwind_compact() -> &'static Catalog {
        &TAILWIND_COMPACT
    }

    /// Validates and wraps a custom table.
    ///
    /// # Errors
    /// * `Empty` - No families
    /// * `EmptyFamily` - A family without swatches
    /// * `DuplicateFamily` - Two families with the same name (ASCII case-insensitive)
    /// * `DuplicateShade` - A shade listed twice within a family
    pub fn new(families: &'static [Family]) -> Result<Self, CatalogError> {
        if families.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, family) in families.iter().enumerate() {
            if family.swatches.is_empty() {
                return Err(CatalogError::EmptyFamily(family.name));
            }
            if families[..i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(family.name))
            {
                return Err(CatalogError::DuplicateFamily(family.name));
            }
            for (j, &(shade, _)) in family.swatches.iter().enumerate() {
                if family.swatches[..j].iter().any(|&(s, _)| s == shade) {
                    return Err(CatalogError::DuplicateShade {
                        family: family.name,
                        shade,
                    });
                }
            }
        }

        Ok(Self::from_trusted(families))
    }

    const fn from_trusted(families: &'static [Family]) -> Self {
        let mut len = 0;
        let mut i = 0;
        while i < families.len() {
            len += families[i].swatches.len();
            i += 1;
        }
        Self { families, len }
    }

    /// Total number of swatches.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: catalogs hold at least one swatch.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Families in declaration order.
    pub fn families(&self) -> impl Iterator<Item = &'static Family> + use<> {
        self.families.iter()
    }

    /// Every swatch, in tie-break order.
    pub fn swatches(&self) -> impl Iterator<Item = Swatch> + use<> {
        self.families.iter().flat_map(Family::swatches)
    }

    /// Finds a family by name, ignoring ASCII case.
    pub fn family(&self, name: &str) -> Option<&'static Family> {
        self.families
            .iter()
            .find(|family| family.name.eq_ignore_ascii_case(name))
    }

    /// Looks up a single swatch.
    pub fn get(&self, family: &str, shade: Shade) -> Option<Swatch> {
        let family = self.family(family)?;
        family.shade(shade).map(|rgb| Swatch {
            family: family.name,
            shade,
            rgb,
        })
    }

    /// Families whose name contains `term`, ignoring ASCII case.
    ///
    /// An empty term matches every family.
    pub fn search<'a>(&self, term: &'a str) -> impl Iterator<Item = &'static Family> + use<'a> {
        self.families
            .iter()
            .filter(move |family| contains_ignore_case(family.name, term))
    }

    /// The given shade from every family that defines it.
    pub fn shade_row(&self, shade: Shade) -> impl Iterator<Item = Swatch> + use<> {
        self.families.iter().filter_map(move |family| {
            family.shade(shade).map(|rgb| Swatch {
                family: family.name,
                shade,
                rgb,
            })
        })
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
