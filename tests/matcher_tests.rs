//! Integration tests for nearest-swatch lookup

mod common;
use common::*;

use rgb_swatch::{Catalog, ColorError, Rgb, Shade, find_closest};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn exact_catalog_color_has_zero_distance() {
    let found = find_closest(rgb(0x10b981));
    assert_eq!((found.family, found.shade), ("emerald", Shade::S500));
    assert_eq!(found.hex, "#10b981");
    assert_eq!(found.distance, 0.0);
    assert!(found.is_exact());
    assert_eq!(found.to_string(), "emerald-500");
}

#[test]
fn every_swatch_finds_an_identical_color() {
    let catalog = Catalog::tailwind();
    for swatch in catalog.swatches() {
        let found = catalog.find_closest(swatch.rgb);
        assert_eq!(found.rgb, swatch.rgb, "{swatch}");
        assert!(found.is_exact(), "{swatch}");
    }
}

#[test]
fn nearest_swatch_for_off_palette_colors() {
    let cases = [
        (Rgb::new(0, 0, 0), "zinc", Shade::S950, 283.0_f64),
        (Rgb::new(255, 255, 255), "zinc", Shade::S50, 75.0),
        (Rgb::new(255, 0, 0), "red", Shade::S600, 4113.0),
        (Rgb::new(0, 0, 255), "blue", Shade::S700, 8446.0),
        (Rgb::new(128, 128, 128), "zinc", Shade::S500, 486.0),
        (Rgb::new(17, 186, 130), "emerald", Shade::S500, 3.0),
        (Rgb::new(0, 255, 0), "green", Shade::S500, 13356.0),
    ];

    for (query, family, shade, distance_squared) in cases {
        let found = find_closest(query);
        assert_eq!((found.family, found.shade), (family, shade), "{query}");
        assert!(approx(found.distance, distance_squared.sqrt()), "{query}: {}", found.distance);
        assert!(!found.is_exact());
    }
}

#[test]
fn distance_matches_rgb_distance() {
    let query = Rgb::new(0, 0, 0);
    let found = find_closest(query);
    assert!(approx(found.distance, query.distance(found.rgb)));
    assert!(approx(found.distance, 16.822603841260722));
}

#[test]
fn earlier_family_wins_identical_colors() {
    // neutral-50 has the same value but comes after zinc.
    let found = find_closest(rgb(0xfafafa));
    assert_eq!((found.family, found.shade), ("zinc", Shade::S50));
}

#[test]
fn equidistant_swatches_resolve_to_catalog_order() {
    let found = tie_catalog().find_closest(Rgb::new(100, 100, 100));
    assert_eq!((found.family, found.shade), ("ink", Shade::S100));
    assert!(approx(found.distance, 10.0));
}

#[test]
fn repeated_color_in_later_family_never_wins() {
    let catalog = repeat_catalog();
    let found = catalog.find_closest(Rgb::new(240, 240, 230));
    assert_eq!((found.family, found.shade), ("paper", Shade::S500));

    let found = catalog.find_closest(Rgb::new(235, 235, 235));
    assert_eq!(found.family, "paper");
}

#[test]
fn lookups_are_deterministic() {
    let catalog = Catalog::tailwind();
    for query in rgb_grid(51) {
        assert_eq!(catalog.find_closest(query), catalog.find_closest(query));
    }
}

#[test]
fn result_is_never_farther_than_any_swatch() {
    let catalog = Catalog::tailwind();
    for query in rgb_grid(85) {
        let found = catalog.find_closest(query);
        let best = catalog
            .swatches()
            .map(|swatch| query.distance_squared(swatch.rgb))
            .min()
            .unwrap();
        assert_eq!(query.distance_squared(found.rgb), best, "{query}");
    }
}

#[test]
fn hex_lookup_parses_strictly() {
    let catalog = Catalog::tailwind();
    let found = catalog.find_closest_hex("#3B82F6").unwrap();
    assert_eq!((found.family, found.shade), ("blue", Shade::S500));

    assert_eq!(catalog.find_closest_hex("#3b82f"), Err(ColorError::InvalidFormat));
    assert_eq!(catalog.find_closest_hex("blue"), Err(ColorError::InvalidFormat));
}

#[test]
fn compact_catalog_never_names_missing_families() {
    let catalog = Catalog::tailwind_compact();
    assert_eq!(catalog.len(), 193);
    assert_eq!(catalog.families().count(), 19);
    for missing in ["neutral", "stone", "sky"] {
        assert!(catalog.family(missing).is_none(), "{missing}");
    }

    let sky_500 = rgb(0x0ea5e9);
    assert_eq!(find_closest(sky_500).to_string(), "sky-500");
    let found = catalog.find_closest(sky_500);
    assert_eq!((found.family, found.shade), ("cyan", Shade::S500));
    assert!(approx(found.distance, 794.0_f64.sqrt()));
}

#[test]
fn compact_catalog_keeps_950_for_three_families() {
    let catalog = Catalog::tailwind_compact();
    let row: Vec<&str> = catalog.shade_row(Shade::S950).map(|s| s.family).collect();
    assert_eq!(row, ["slate", "gray", "rose"]);

    let found = catalog.find_closest(Rgb::new(0, 0, 0));
    assert_eq!((found.family, found.shade), ("gray", Shade::S950));
    assert_eq!(catalog.find_closest(rgb(0x10b981)).to_string(), "emerald-500");
}
