//! Nearest-color lookup over a [`Catalog`].
//!
//! A linear scan with Euclidean distance in RGB space. Catalogs are small and
//! fixed, so no index is built. Squared distances are compared as integers;
//! the first swatch reaching the minimum wins.

use crate::catalog::{Catalog, Shade, Swatch};
use crate::parse::parse_strict;
use crate::types::{ColorError, HexColor, Rgb};
use core::fmt;

/// The catalog swatch closest to a queried color.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Family of the winning swatch.
    pub family: &'static str,
    /// Shade of the winning swatch.
    pub shade: Shade,
    /// Swatch color.
    pub rgb: Rgb,
    /// Swatch color as hex text.
    pub hex: HexColor,
    /// Euclidean RGB distance between the query and the swatch.
    pub distance: f64,
}

impl Match {
    fn new(swatch: Swatch, distance_squared: u32) -> Self {
        Self {
            family: swatch.family,
            shade: swatch.shade,
            rgb: swatch.rgb,
            hex: swatch.hex(),
            distance: crate::num::sqrt(distance_squared as f64),
        }
    }

    // Result for a scan over no swatches. Unreachable through the public API.
    fn unmatched(color: Rgb) -> Self {
        Self {
            family: "",
            shade: Shade::S500,
            rgb: color,
            hex: HexColor::from(color),
            distance: 0.0,
        }
    }

    /// True when the query was exactly a catalog color.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.distance == 0.0
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family, self.shade)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Match {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}-{=str} ({=str})", self.family, self.shade.as_str(), self.hex.as_str());
    }
}

impl Catalog {
    /// Finds the swatch nearest to `color`.
    ///
    /// Ties go to the swatch that comes first in catalog order.
    pub fn find_closest(&self, color: Rgb) -> Match {
        let mut swatches = self.swatches();
        // `Catalog::new` rejects empty tables and empty families.
        debug_assert!(!self.is_empty());
        let Some(first) = swatches.next() else {
            return Match::unmatched(color);
        };

        let mut best = first;
        let mut best_dist = color.distance_squared(first.rgb);

        for swatch in swatches {
            if best_dist == 0 {
                break;
            }
            let dist = color.distance_squared(swatch.rgb);
            if dist < best_dist {
                best = swatch;
                best_dist = dist;
            }
        }

        Match::new(best, best_dist)
    }

    /// Parses hex text strictly, then finds the nearest swatch.
    ///
    /// # Errors
    /// * `InvalidFormat` - `hex` is not a six-digit hex color
    pub fn find_closest_hex(&self, hex: &str) -> Result<Match, ColorError> {
        parse_strict(hex).map(|rgb| self.find_closest(rgb))
    }
}

/// Finds the nearest Tailwind CSS swatch.
#[inline]
pub fn find_closest(color: Rgb) -> Match {
    Catalog::tailwind().find_closest(color)
}
