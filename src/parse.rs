//! Hex color parsing.
//!
//! Two entry points share one grammar, `^#?[0-9A-Fa-f]{6}$`:
//!
//! - [`parse_strict`] for programmatic use, failing with
//!   [`ColorError::InvalidFormat`] on anything else.
//! - [`parse_partial`] for live text fields, telling a half-typed value apart
//!   from a broken one so callers can keep the last committed color.

use crate::types::{ColorError, Rgb};

/// Outcome of parsing hex text that may still be in the middle of being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexInput {
    /// Six valid digits: a color can be committed.
    Complete(Rgb),

    /// A valid prefix (optional `#`, up to five digits). Keep waiting.
    Pending,

    /// Not a prefix of any valid hex color.
    Invalid,
}

impl HexInput {
    /// Returns the parsed color, if complete.
    pub fn rgb(self) -> Option<Rgb> {
        match self {
            HexInput::Complete(rgb) => Some(rgb),
            HexInput::Pending | HexInput::Invalid => None,
        }
    }
}

/// Parses exactly six hex digits with an optional leading `#`.
///
/// # Errors
/// * `InvalidFormat` - Wrong length or a non-hex character
pub fn parse_strict(input: &str) -> Result<Rgb, ColorError> {
    match parse_partial(input) {
        HexInput::Complete(rgb) => Ok(rgb),
        HexInput::Pending | HexInput::Invalid => Err(ColorError::InvalidFormat),
    }
}

/// Classifies possibly incomplete hex text.
pub fn parse_partial(input: &str) -> HexInput {
    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();

    if digits.len() > 6 || !digits.iter().all(|&c| nibble(c).is_some()) {
        return HexInput::Invalid;
    }
    if digits.len() < 6 {
        return HexInput::Pending;
    }

    let byte = |i: usize| (hex_value(digits[i]) << 4) | hex_value(digits[i + 1]);
    HexInput::Complete(Rgb::new(byte(0), byte(2), byte(4)))
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// Callers validate digits first.
#[inline]
fn hex_value(c: u8) -> u8 {
    nibble(c).unwrap_or(0)
}
