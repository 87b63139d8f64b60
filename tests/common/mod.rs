//! Shared test infrastructure for rgb-swatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rgb_swatch::{Catalog, Family, Rgb, Shade};

// ============================================================================
// Color Helpers
// ============================================================================

/// Shorthand for a `0xRRGGBB` literal.
pub fn rgb(packed: u32) -> Rgb {
    Rgb::from_u32(packed)
}

/// Largest per-channel difference between two colors.
pub fn channel_drift(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

/// Every `step`-th point of the RGB cube, plus the far corner.
pub fn rgb_grid(step: usize) -> impl Iterator<Item = Rgb> {
    let axis = move || (0..=255u8).step_by(step).chain(core::iter::once(255));
    axis().flat_map(move |r| {
        axis().flat_map(move |g| axis().map(move |b| Rgb::new(r, g, b)))
    })
}

// ============================================================================
// Custom Catalogs
// ============================================================================

const INK: [(Shade, Rgb); 2] = [
    (Shade::S100, Rgb::new(90, 100, 100)),
    (Shade::S900, Rgb::new(10, 10, 10)),
];

const PAPER: [(Shade, Rgb); 2] = [
    (Shade::S100, Rgb::new(110, 100, 100)),
    (Shade::S500, Rgb::new(240, 240, 230)),
];

const ECHO: [(Shade, Rgb); 1] = [(Shade::S500, Rgb::new(240, 240, 230))];

/// Two families whose swatches are equidistant from rgb(100, 100, 100).
pub static TIE_FAMILIES: [Family; 2] = [Family::new("ink", &INK), Family::new("paper", &PAPER)];

/// `echo-500` repeats `paper-500` in a later family.
pub static REPEAT_FAMILIES: [Family; 2] = [Family::new("paper", &PAPER), Family::new("echo", &ECHO)];

pub fn tie_catalog() -> Catalog {
    Catalog::new(&TIE_FAMILIES).unwrap()
}

pub fn repeat_catalog() -> Catalog {
    Catalog::new(&REPEAT_FAMILIES).unwrap()
}
