//! Integration tests for converter sessions

mod common;
use common::*;

use rgb_swatch::{
    Catalog, Cmyk, ColorError, ColorInput, Converter, HISTORY_CAPACITY, Hsl, Rgb, Shade, Update,
};

#[test]
fn default_session_starts_on_emerald() {
    let converter = Converter::default();
    let snapshot = converter.snapshot();

    assert_eq!(snapshot.hex, "#10b981");
    assert_eq!(snapshot.rgb, Rgb::new(16, 185, 129));
    assert_eq!(snapshot.hsl, Hsl::new(160, 84, 39));
    assert_eq!(snapshot.cmyk, Cmyk::new(91, 0, 30, 27));
    assert_eq!(converter.closest().to_string(), "emerald-500");
    assert!(converter.history().is_empty());
}

#[test]
fn hex_edit_updates_every_format() {
    let mut converter = Converter::default();
    assert_eq!(converter.apply(ColorInput::Hex("#3b82f6")), Ok(Update::Committed));

    let snapshot = converter.snapshot();
    assert_eq!(snapshot.rgb, Rgb::new(59, 130, 246));
    assert_eq!(snapshot.hsl, Hsl::new(217, 91, 60));
    assert_eq!(converter.closest().family, "blue");
    assert_eq!(converter.closest().shade, Shade::S500);
    assert_eq!(converter.history(), ["#3b82f6"]);
}

#[test]
fn partial_hex_keeps_current_color() {
    let mut converter = Converter::default();
    let before = converter.snapshot().clone();

    assert_eq!(converter.apply(ColorInput::Hex("#3b8")), Ok(Update::Pending));
    assert_eq!(converter.snapshot(), &before);
    assert!(converter.history().is_empty());
}

#[test]
fn invalid_hex_is_rejected_without_changes() {
    let mut converter = Converter::default();
    let before = converter.snapshot().clone();

    assert_eq!(converter.apply(ColorInput::Hex("#zz")), Err(ColorError::InvalidFormat));
    assert_eq!(converter.apply(ColorInput::Hex("#3b82f6a")), Err(ColorError::InvalidFormat));
    assert_eq!(converter.snapshot(), &before);
    assert_eq!(converter.closest().family, "emerald");
    assert!(converter.history().is_empty());
}

#[test]
fn rgb_edit_is_clamped() {
    let mut converter = Converter::default();
    let edit = ColorInput::Rgb {
        r: 300.0,
        g: -5.0,
        b: 12.6,
    };
    assert_eq!(converter.apply(edit), Ok(Update::Committed));
    assert_eq!(converter.snapshot().rgb, Rgb::new(255, 0, 13));
    assert_eq!(converter.snapshot().hex, "#ff000d");
}

#[test]
fn hsl_edit_keeps_entered_values() {
    let mut converter = Converter::default();
    converter
        .apply(ColorInput::Hsl {
            h: 480.0,
            s: 150.0,
            l: 50.0,
        })
        .unwrap();

    let snapshot = converter.snapshot();
    assert_eq!(snapshot.hsl, Hsl::new(120, 100, 50));
    assert_eq!(snapshot.rgb, Rgb::new(0, 255, 0));
    assert_eq!(snapshot.cmyk, Cmyk::new(100, 0, 100, 0));
    assert_eq!(converter.closest().to_string(), "green-500");
}

#[test]
fn hsl_edit_does_not_round_trip_through_rgb() {
    let mut converter = Converter::default();
    converter
        .apply(ColorInput::Hsl {
            h: 152.0,
            s: 84.0,
            l: 39.0,
        })
        .unwrap();

    // Re-deriving HSL from the RGB result would give a different value.
    assert_eq!(converter.snapshot().hsl, Hsl::new(152, 84, 39));
    assert_eq!(converter.snapshot().rgb, Rgb::new(16, 183, 105));
}

#[test]
fn cmyk_edit_keeps_entered_values() {
    let mut converter = Converter::default();
    converter
        .apply(ColorInput::Cmyk {
            c: 0.0,
            m: 100.0,
            y: 100.0,
            k: 0.0,
        })
        .unwrap();

    let snapshot = converter.snapshot();
    assert_eq!(snapshot.cmyk, Cmyk::new(0, 100, 100, 0));
    assert_eq!(snapshot.rgb, Rgb::new(255, 0, 0));
    assert_eq!(snapshot.hsl, Hsl::new(0, 100, 50));
    assert_eq!(converter.closest().to_string(), "red-600");
}

#[test]
fn history_moves_repeats_to_front() {
    let mut converter = Converter::default();
    converter.set_rgb(rgb(0xaaaaaa));
    converter.set_rgb(rgb(0xbbbbbb));
    converter.set_rgb(rgb(0xaaaaaa));
    assert_eq!(converter.history(), ["#aaaaaa", "#bbbbbb"]);

    converter.set_rgb(rgb(0xaaaaaa));
    assert_eq!(converter.history().len(), 2);
}

#[test]
fn history_drops_oldest_when_full() {
    let mut converter = Converter::default();
    for i in 0..12 {
        converter.set_rgb(Rgb::new(i, 0, 0));
    }

    let history = converter.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history[0], "#0b0000");
    assert_eq!(history[HISTORY_CAPACITY - 1], "#020000");

    converter.clear_history();
    assert!(converter.history().is_empty());
    assert_eq!(converter.snapshot().hex, "#0b0000");
}

#[test]
fn custom_catalog_session() {
    let catalog = tie_catalog();
    let mut converter = Converter::new(&catalog, Rgb::new(100, 100, 100));
    assert_eq!(converter.closest().to_string(), "ink-100");

    converter.apply(ColorInput::Hex("f0f0e6")).unwrap();
    assert_eq!(converter.closest().to_string(), "paper-500");
    assert!(converter.closest().is_exact());
    assert!(core::ptr::eq(converter.catalog(), &catalog));
    assert!(!core::ptr::eq(converter.catalog(), Catalog::tailwind()));
}

#[test]
fn input_format_names() {
    assert_eq!(ColorInput::Hex("#fff").format(), "hex");
    assert_eq!(ColorInput::Cmyk { c: 0.0, m: 0.0, y: 0.0, k: 0.0 }.format(), "cmyk");
}
