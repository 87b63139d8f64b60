//! Converter session: one color shown in four formats.
//!
//! Provides [`Converter`], which keeps the current [`ColorSnapshot`] in sync as
//! any one field is edited, tracks the nearest catalog swatch, and remembers
//! recently committed colors.

use crate::catalog::Catalog;
use crate::colors::{cmyk_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl};
use crate::input::ColorInput;
use crate::matcher::Match;
use crate::parse::{HexInput, parse_partial};
use crate::types::{Cmyk, ColorError, HexColor, Hsl, Rgb};
use crate::DEFAULT_COLOR;
use heapless::Vec;

/// Number of recent colors kept in the history.
pub const HISTORY_CAPACITY: usize = 10;

/// A color expressed in all four formats.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorSnapshot {
    /// Hex text.
    pub hex: HexColor,
    /// RGB channels.
    pub rgb: Rgb,
    /// HSL components.
    pub hsl: Hsl,
    /// CMYK components.
    pub cmyk: Cmyk,
}

impl ColorSnapshot {
    /// Derives every format from RGB.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: HexColor::from(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
            cmyk: rgb_to_cmyk(rgb),
        }
    }

    /// Keeps `hsl` as given and derives the rest through RGB.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb = hsl_to_rgb(hsl);
        Self {
            hex: HexColor::from(rgb),
            rgb,
            hsl,
            cmyk: rgb_to_cmyk(rgb),
        }
    }

    /// Keeps `cmyk` as given and derives the rest through RGB.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        let rgb = cmyk_to_rgb(cmyk);
        Self {
            hex: HexColor::from(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
            cmyk,
        }
    }
}

/// Result of applying an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Update {
    /// The edit produced a new color.
    Committed,
    /// Hex text is still being typed; nothing changed.
    Pending,
}

/// Keeps the four color formats, the nearest swatch and the history in sync.
///
/// # Type Parameters
/// * `'c` - Lifetime of the catalog used for nearest-swatch lookups
#[derive(Debug, Clone)]
pub struct Converter<'c> {
    catalog: &'c Catalog,
    snapshot: ColorSnapshot,
    closest: Match,
    history: Vec<HexColor, HISTORY_CAPACITY>,
}

impl<'c> Converter<'c> {
    /// Creates a session showing `initial`, with an empty history.
    pub fn new(catalog: &'c Catalog, initial: Rgb) -> Self {
        Self {
            catalog,
            snapshot: ColorSnapshot::from_rgb(initial),
            closest: catalog.find_closest(initial),
            history: Vec::new(),
        }
    }

    /// Applies an edit to one field.
    ///
    /// Numeric edits are clamped and always commit. Hex edits commit only once
    /// six digits are present; a partial value returns [`Update::Pending`].
    ///
    /// # Errors
    /// * `InvalidFormat` - Hex text that can never become a color; the current
    ///   color is kept
    pub fn apply(&mut self, input: ColorInput<'_>) -> Result<Update, ColorError> {
        let snapshot = match input {
            ColorInput::Hex(text) => match parse_partial(text) {
                HexInput::Complete(rgb) => ColorSnapshot::from_rgb(rgb),
                HexInput::Pending => return Ok(Update::Pending),
                HexInput::Invalid => return Err(ColorError::InvalidFormat),
            },
            ColorInput::Rgb { r, g, b } => ColorSnapshot::from_rgb(Rgb::clamped(r, g, b)),
            ColorInput::Hsl { h, s, l } => ColorSnapshot::from_hsl(Hsl::clamped(h, s, l)),
            ColorInput::Cmyk { c, m, y, k } => {
                ColorSnapshot::from_cmyk(Cmyk::clamped(c, m, y, k))
            }
        };

        self.commit(snapshot);
        Ok(Update::Committed)
    }

    /// Replaces the current color with `rgb`.
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.commit(ColorSnapshot::from_rgb(rgb));
    }

    fn commit(&mut self, snapshot: ColorSnapshot) {
        self.closest = self.catalog.find_closest(snapshot.rgb);
        self.remember(snapshot.hex.clone());
        self.snapshot = snapshot;
    }

    /// Moves `hex` to the front of the history, dropping the oldest entry when full.
    fn remember(&mut self, hex: HexColor) {
        if self.history.first() == Some(&hex) {
            return;
        }
        self.history.retain(|seen| *seen != hex);
        if self.history.is_full() {
            self.history.pop();
        }
        // Room was made above.
        let _ = self.history.insert(0, hex);
    }

    /// Current color in all formats.
    #[inline]
    pub fn snapshot(&self) -> &ColorSnapshot {
        &self.snapshot
    }

    /// Nearest catalog swatch to the current color.
    #[inline]
    pub fn closest(&self) -> &Match {
        &self.closest
    }

    /// Committed colors, most recent first.
    #[inline]
    pub fn history(&self) -> &[HexColor] {
        &self.history
    }

    /// Forgets all committed colors.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Catalog used for lookups.
    #[inline]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}

impl Default for Converter<'static> {
    /// Starts on emerald-500 against the Tailwind catalog.
    fn default() -> Self {
        Converter::new(Catalog::tailwind(), DEFAULT_COLOR)
    }
}
