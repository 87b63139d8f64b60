//! Integration tests for harmony generation

mod common;
use common::*;

use rgb_swatch::harmony::generate;
use rgb_swatch::{HarmonySettings, Harmony, HexColor, MAX_HARMONY_COLORS, Rgb};

const BLUE_500: u32 = 0x3b82f6;

fn hexes(base: Rgb, harmony: Harmony) -> Vec<HexColor> {
    generate(base, harmony, HarmonySettings::default())
        .into_iter()
        .map(HexColor::from)
        .collect()
}

#[test]
fn default_settings() {
    let settings = HarmonySettings::default();
    assert_eq!((settings.saturation, settings.lightness), (70, 50));
}

#[test]
fn complementary() {
    assert_eq!(hexes(rgb(BLUE_500), Harmony::Complementary), ["#3b82f6", "#d99426"]);
    assert_eq!(hexes(rgb(0xff0000), Harmony::Complementary), ["#ff0000", "#26d9d9"]);
}

#[test]
fn triadic() {
    assert_eq!(hexes(rgb(BLUE_500), Harmony::Triadic), ["#3b82f6", "#d9266b", "#6bd926"]);
}

#[test]
fn analogous() {
    assert_eq!(hexes(rgb(BLUE_500), Harmony::Analogous), ["#3b82f6", "#3b26d9", "#9426d9"]);
}

#[test]
fn split_complementary() {
    assert_eq!(
        hexes(rgb(BLUE_500), Harmony::SplitComplementary),
        ["#3b82f6", "#d93b26", "#c4d926"]
    );
}

#[test]
fn tetradic() {
    assert_eq!(
        hexes(rgb(BLUE_500), Harmony::Tetradic),
        ["#3b82f6", "#9426d9", "#d99426", "#6bd926"]
    );
}

#[test]
fn monochromatic_runs_dark_to_light_around_the_base() {
    assert_eq!(
        hexes(rgb(BLUE_500), Harmony::Monochromatic),
        ["#28313e", "#2e4f85", "#3b82f6", "#5b94f1"]
    );
}

#[test]
fn gray_base_rotates_from_red() {
    assert_eq!(
        hexes(rgb(0x808080), Harmony::Triadic),
        ["#808080", "#26d926", "#2626d9"]
    );
}

#[test]
fn settings_change_generated_colors_only() {
    let settings = HarmonySettings {
        saturation: 100,
        lightness: 50,
    };
    let colors = generate(rgb(BLUE_500), Harmony::Complementary, settings);
    assert_eq!(colors[0], rgb(BLUE_500));
    assert_eq!(HexColor::from(colors[1]), "#ff9d00");

    let gray = HarmonySettings {
        saturation: 0,
        lightness: 50,
    };
    let colors = generate(rgb(BLUE_500), Harmony::Tetradic, gray);
    assert!(colors[1..].iter().all(|&c| c == Rgb::new(128, 128, 128)));
}

#[test]
fn color_count_follows_angles() {
    for harmony in Harmony::ALL {
        let colors = generate(rgb(BLUE_500), harmony, HarmonySettings::default());
        assert_eq!(colors.len(), harmony.angles().len(), "{}", harmony.name());
        assert!(colors.len() <= MAX_HARMONY_COLORS);
    }
}

#[test]
fn generation_is_deterministic() {
    for harmony in Harmony::ALL {
        for base in rgb_grid(64) {
            let settings = HarmonySettings::default();
            assert_eq!(generate(base, harmony, settings), generate(base, harmony, settings));
        }
    }
}
