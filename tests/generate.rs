//! End-to-end generation against a small synthetic asset catalog.

use std::collections::HashMap;

use image::Rgba;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use mugshot::{
    write_png, BodyPart, BodyParts, Catalog, Colour, ColourRole, Generator, GeneratorConfig, Layer,
    MugshotError, OverridePolicy, Overrides, Palette, Selection, TraitKind, Variant,
};

const W: u32 = 8;
const H: u32 = 8;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
const GLASSES: Rgba<u8> = Rgba([10, 20, 30, 255]);

/// Pixel inside the torso that only the body layer covers.
const TORSO: (u32, u32) = (4, 6);

fn mask(name: &str, pixel: Rgba<u8>, covers: impl Fn(u32, u32) -> bool) -> Layer {
    Layer::from_fn(name, W, H, |x, y| if covers(x, y) { pixel } else { CLEAR })
}

fn clear(name: &str) -> Layer {
    mask(name, CLEAR, |_, _| false)
}

fn body() -> BodyParts {
    let mut parts: HashMap<BodyPart, Layer> = BodyPart::REQUIRED
        .into_iter()
        .map(|part| (part, clear(part.file_stem())))
        .collect();
    parts.insert(BodyPart::Body, mask("body", WHITE, |_, _| true));
    parts.insert(BodyPart::Head, mask("head", WHITE, |_, y| y < 3));
    BodyParts::assemble(parts).unwrap()
}

fn catalog_with(skip: Option<TraitKind>) -> Catalog {
    let mut builder = Catalog::builder(body());
    let mut add = |variant: Variant| {
        if Some(variant.kind) != skip {
            builder.add_variant(variant);
        }
    };

    for (i, name) in ["wide", "narrow"].into_iter().enumerate() {
        let x = i as u32;
        add(Variant::new(TraitKind::Eyes, name)
            .with_foreground(mask("fg", Rgba([0, 0, 0, 255]), move |px, py| px == 1 + x && py == 1)));
        add(Variant::new(TraitKind::Mouth, name)
            .with_foreground(mask("fg", Rgba([90, 0, 0, 255]), move |px, py| px == 2 + x && py == 2)));
    }
    add(Variant::new(TraitKind::Shirt, "tee").with_background(mask("bg", WHITE, |x, y| x < 2 && (4..6).contains(&y))));
    add(Variant::new(TraitKind::Trousers, "jeans").with_background(mask("bg", WHITE, |x, y| x < 2 && y >= 6)));
    add(Variant::new(TraitKind::Hair, "crop")
        .with_background(clear("bg"))
        .with_foreground(mask("fg", WHITE, |x, y| y == 0 && x < 6)));
    add(Variant::new(TraitKind::Glasses, "round").with_foreground(mask("fg", GLASSES, |_, y| y == 1)));
    add(Variant::new(TraitKind::Beard, "stubble").with_foreground(mask("fg", WHITE, |x, y| x == 7 && y == 3)));
    add(Variant::new(TraitKind::Hat, "cap").with_foreground(mask("fg", Rgba([1, 2, 3, 255]), |x, y| x == 7 && y == 0)));
    add(Variant::new(TraitKind::Jewellery, "chain").with_foreground(clear("fg")));
    add(Variant::new(TraitKind::Item, "mug").with_foreground(clear("fg")));
    add(Variant::new(TraitKind::Pin, "badge").with_foreground(clear("fg")));

    builder.build().unwrap()
}

fn catalog() -> Catalog {
    catalog_with(None)
}

fn pixel(canvas: &image::RgbaImage, (x, y): (u32, u32)) -> [u8; 4] {
    canvas.get_pixel(x, y).0
}

#[test]
fn test_pinned_skin_and_hair_without_glasses() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    let overrides = Overrides::new()
        .colour(ColourRole::Skin, 0)
        .variant(TraitKind::Hair, 0)
        .present(TraitKind::Hair, true)
        .present(TraitKind::Glasses, false);
    let portrait = generator.generate_seeded(&overrides, 17).unwrap();

    assert_eq!(pixel(&portrait.canvas, TORSO), [254, 218, 181, 255]);
    assert!(portrait.canvas.pixels().all(|p| *p != GLASSES));

    let hair = portrait.selection.colour(ColourRole::Hair).unwrap().to_rgb();
    assert_eq!(pixel(&portrait.canvas, (3, 0)), [hair[0], hair[1], hair[2], 255]);
    assert!(portrait.selection.is_present(TraitKind::Hair));
    assert!(!portrait.selection.is_present(TraitKind::Glasses));
}

#[test]
fn test_glasses_drawn_when_present() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    let overrides = Overrides::new()
        .present(TraitKind::Glasses, true)
        .present(TraitKind::Hair, false);
    let portrait = generator.generate_seeded(&overrides, 3).unwrap();

    assert_eq!(pixel(&portrait.canvas, (4, 1)), GLASSES.0);
}

#[test]
fn test_same_seed_same_portrait() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    for seed in [0, 1, 42, u64::MAX] {
        let a = generator.generate_seeded(&Overrides::new(), seed).unwrap();
        let b = generator.generate_seeded(&Overrides::new(), seed).unwrap();
        assert_eq!(a.selection, b.selection);
        assert!(a.canvas == b.canvas, "seed {} produced different canvases", seed);
    }
}

#[test]
fn test_replay_with_any_seed() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    for seed in 0..25 {
        let original = generator.generate_seeded(&Overrides::new(), seed).unwrap();
        let replayed = generator
            .generate_seeded(&Overrides::from(&original.selection), seed + 1000)
            .unwrap();

        assert!(original.canvas == replayed.canvas, "seed {} did not replay", seed);
        assert_eq!(original.selection.variants, replayed.selection.variants);
        assert_eq!(original.selection.trousers_colour, replayed.selection.trousers_colour);
    }
}

#[test]
fn test_replay_from_json_record() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);
    let dir = tempdir().unwrap();
    let record = dir.path().join("portrait.json");

    let original = generator.generate_seeded(&Overrides::new(), 5).unwrap();
    original.selection.write(&record).unwrap();

    let selection = Selection::read(&record).unwrap();
    let replayed = generator.generate_seeded(&Overrides::from(&selection), 6).unwrap();
    assert!(original.canvas == replayed.canvas);
}

#[test]
fn test_shade_clamps() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    for seed in 0..300 {
        let overrides = Overrides::new().present(TraitKind::Beard, true);
        let portrait = generator.generate_seeded(&overrides, seed).unwrap();
        let selection = &portrait.selection;

        let trousers = selection.trousers_colour.to_rgb();
        assert!(trousers.iter().all(|c| (10..=250).contains(c)), "trousers {:?}", trousers);
        assert!((-50..50).contains(&selection.trousers_shade));
        assert_eq!(pixel(&portrait.canvas, (0, 7)), [trousers[0], trousers[1], trousers[2], 255]);

        let beard = selection.beard_colour.unwrap().to_rgb();
        assert!(beard.iter().all(|c| *c <= 254), "beard {:?}", beard);
        assert!((0..50).contains(&selection.beard_shade.unwrap()));
        assert_eq!(pixel(&portrait.canvas, (7, 3)), [beard[0], beard[1], beard[2], 255]);
    }
}

#[test]
fn test_saturated_colours_clamp() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    // #F0F3F2 shirt pushed up, #E6E6E6 hair lightened
    let overrides = Overrides::new()
        .colour(ColourRole::Shirt, 1)
        .colour(ColourRole::Hair, 0)
        .present(TraitKind::Beard, true)
        .trousers_shade(49)
        .beard_shade(49);
    let portrait = generator.generate_seeded(&overrides, 0).unwrap();

    assert_eq!(portrait.selection.trousers_colour, Colour::rgb(250, 250, 250));
    assert_eq!(portrait.selection.beard_colour, Some(Colour::rgb(254, 254, 254)));
}

#[test]
fn test_extreme_shade_overrides_clamp() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    let overrides = Overrides::new()
        .present(TraitKind::Beard, true)
        .trousers_shade(i32::MAX)
        .beard_shade(i32::MIN);
    let portrait = generator.generate_seeded(&overrides, 0).unwrap();

    assert_eq!(portrait.selection.trousers_colour, Colour::rgb(250, 250, 250));
    assert_eq!(portrait.selection.beard_colour, Some(Colour::rgb(0, 0, 0)));
}

#[test]
fn test_no_residue_between_runs() {
    let catalog = catalog();
    let before = catalog.clone();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    let red = Overrides::new().colour(ColourRole::Shirt, 3);
    let blue = Overrides::new().colour(ColourRole::Shirt, 11);

    let first = generator.generate_seeded(&red, 8).unwrap();
    let other = generator.generate_seeded(&blue, 8).unwrap();
    let again = generator.generate_seeded(&red, 8).unwrap();

    assert!(first.canvas == again.canvas);
    assert_eq!(pixel(&first.canvas, (0, 4)), [199, 0, 57, 255]);
    assert_eq!(pixel(&other.canvas, (0, 4)), [42, 123, 155, 255]);

    let shirt = catalog.variants(TraitKind::Shirt).get(0).unwrap();
    assert_eq!(shirt, before.variants(TraitKind::Shirt).get(0).unwrap());
    assert_eq!(shirt.background[0].get(0, 4), Some([255, 255, 255, 255]));
}

#[test]
fn test_empty_mandatory_category() {
    let catalog = catalog_with(Some(TraitKind::Mouth));
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    let err = generator.generate_seeded(&Overrides::new(), 0).unwrap_err();
    assert!(matches!(err, MugshotError::EmptyCatalog { ref category } if category == "mouth"));
}

#[test]
fn test_strict_overrides() {
    let catalog = catalog();
    let palette = Palette::default();
    let config = GeneratorConfig {
        policy: OverridePolicy::Strict,
        ..GeneratorConfig::default()
    };
    let generator = Generator::new(&catalog, &palette).with_config(config);

    let err = generator
        .generate_seeded(&Overrides::new().colour(ColourRole::Skin, 5), 0)
        .unwrap_err();
    assert!(matches!(err, MugshotError::InvalidOverrideIndex { index: 5, len: 5, .. }));
}

#[test]
fn test_shared_across_threads() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);

    let sequential: Vec<_> = (0..8)
        .map(|seed| generator.generate_seeded(&Overrides::new(), seed).unwrap().canvas)
        .collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|seed| {
                let generator = &generator;
                scope.spawn(move || generator.generate_seeded(&Overrides::new(), seed).unwrap().canvas)
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(sequential == parallel);
}

#[test]
fn test_written_png_matches_canvas() {
    let catalog = catalog();
    let palette = Palette::default();
    let generator = Generator::new(&catalog, &palette);
    let dir = tempdir().unwrap();
    let path = dir.path().join("portrait.png");

    let portrait = generator.generate_seeded(&Overrides::new(), 21).unwrap();
    write_png(&portrait.canvas, &path, None).unwrap();

    let loaded = image::open(&path).unwrap().to_rgba8();
    assert!(loaded == portrait.canvas);
}
