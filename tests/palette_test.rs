use cubeflow::palette::{Color, Palette, CATALOG};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn every_catalog_entry_parses() {
    for entry in CATALOG {
        Palette::parse(entry).expect("catalog entry failed to parse");
    }
}

#[test]
fn picked_palette_is_a_catalog_member() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = Palette::pick(&mut rng).unwrap();
        let is_member = CATALOG
            .iter()
            .any(|entry| Palette::parse(entry).unwrap() == picked);
        assert!(is_member, "picked palette not in catalog for seed {}", seed);
    }
}

#[test]
fn picked_color_is_a_palette_member() {
    let mut rng = StdRng::seed_from_u64(7);
    let palette = Palette::pick(&mut rng).unwrap();
    for _ in 0..64 {
        let color = palette.pick_color(&mut rng);
        assert!(palette.colors().contains(&color));
    }
}

#[test]
fn palette_pick_is_deterministic_for_equal_seeds() {
    let mut a = StdRng::seed_from_u64(11);
    let mut b = StdRng::seed_from_u64(11);
    assert_eq!(
        Palette::pick(&mut a).unwrap(),
        Palette::pick(&mut b).unwrap()
    );
}

#[test]
fn hex_parsing_maps_the_extremes() {
    let white = Color::from_hex("#ffffff").unwrap();
    assert_eq!(white, Color::WHITE);
    let black = Color::from_hex("#000000").unwrap();
    assert_eq!(black.to_array(), [0.0, 0.0, 0.0]);
}

#[test]
fn hex_parsing_linearises_midtones() {
    // sRGB 0x80 is darker than half in linear space.
    let gray = Color::from_hex("#808080").unwrap();
    assert!(gray.r > 0.2 && gray.r < 0.25);
    assert_eq!(gray.r, gray.g);
    assert_eq!(gray.g, gray.b);
}

#[test]
fn hex_parsing_rejects_malformed_input() {
    assert!(Color::from_hex("ffffff").is_err());
    assert!(Color::from_hex("#fff").is_err());
    assert!(Color::from_hex("#gggggg").is_err());
}
