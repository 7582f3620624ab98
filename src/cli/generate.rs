//! Generate command implementation.
//!
//! Loads the asset tree, resolves traits and writes PNG portraits.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rand::Rng;

use crate::discovery::discover_with_assets;
use crate::error::{MugshotError, Result};
use crate::generate::{Generator, OverridePolicy, Overrides, Selection};
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::types::{ColourRole, TraitKind};
use crate::validation::{print_diagnostics, validate_catalog};

/// Generate portraits
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project directory holding mugshot.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Asset tree to load (overrides the manifest)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Number of portraits to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Seed of the first portrait; portrait i uses seed + i
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reproduce the choices of a selection record
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Write a selection record next to each portrait
    #[arg(long)]
    pub record: bool,

    /// Fail on out-of-range override indices
    #[arg(long)]
    pub strict: bool,

    /// Shrink output to fit within this many pixels
    #[arg(long, value_name = "PX")]
    pub resize: Option<u32>,

    #[command(flatten)]
    pub traits: TraitArgs,
}

/// Per-trait overrides.
#[derive(Args, Debug, Default)]
pub struct TraitArgs {
    /// Skin colour index
    #[arg(long, value_name = "N")]
    pub skin: Option<usize>,

    /// Hair colour index
    #[arg(long, value_name = "N")]
    pub hair_colour: Option<usize>,

    /// Beard colour index (with `stages.beard_colour: palette`)
    #[arg(long, value_name = "N")]
    pub beard_colour: Option<usize>,

    /// Shirt colour index
    #[arg(long, value_name = "N")]
    pub shirt_colour: Option<usize>,

    /// Eyes variant index
    #[arg(long, value_name = "N")]
    pub eyes: Option<usize>,

    /// Mouth variant index
    #[arg(long, value_name = "N")]
    pub mouth: Option<usize>,

    /// Shirt variant index
    #[arg(long, value_name = "N")]
    pub shirt: Option<usize>,

    /// Trousers variant index
    #[arg(long, value_name = "N")]
    pub trousers: Option<usize>,

    /// Hair variant index (implies --with hair)
    #[arg(long, value_name = "N")]
    pub hair: Option<usize>,

    /// Glasses variant index (implies --with glasses)
    #[arg(long, value_name = "N")]
    pub glasses: Option<usize>,

    /// Beard variant index (implies --with beard)
    #[arg(long, value_name = "N")]
    pub beard: Option<usize>,

    /// Hat variant index (implies --with hat)
    #[arg(long, value_name = "N")]
    pub hat: Option<usize>,

    /// Jewellery variant index (implies --with jewellery)
    #[arg(long, value_name = "N")]
    pub jewellery: Option<usize>,

    /// Item variant index (implies --with item)
    #[arg(long, value_name = "N")]
    pub item: Option<usize>,

    /// Pin variant index (implies --with pin)
    #[arg(long, value_name = "N")]
    pub pin: Option<usize>,

    /// Force an optional trait to appear
    #[arg(long = "with", value_name = "TRAIT")]
    pub with: Vec<TraitKind>,

    /// Force an optional trait to be absent
    #[arg(long = "without", value_name = "TRAIT")]
    pub without: Vec<TraitKind>,
}

impl TraitArgs {
    /// Layer these flags over `base`.
    pub fn apply(&self, mut base: Overrides) -> Overrides {
        let colours = [
            (ColourRole::Skin, self.skin),
            (ColourRole::Hair, self.hair_colour),
            (ColourRole::Beard, self.beard_colour),
            (ColourRole::Shirt, self.shirt_colour),
        ];
        for (role, index) in colours {
            if let Some(index) = index {
                base = base.colour(role, index);
            }
        }

        let variants = [
            (TraitKind::Eyes, self.eyes),
            (TraitKind::Mouth, self.mouth),
            (TraitKind::Shirt, self.shirt),
            (TraitKind::Trousers, self.trousers),
            (TraitKind::Hair, self.hair),
            (TraitKind::Glasses, self.glasses),
            (TraitKind::Beard, self.beard),
            (TraitKind::Hat, self.hat),
            (TraitKind::Jewellery, self.jewellery),
            (TraitKind::Item, self.item),
            (TraitKind::Pin, self.pin),
        ];
        for (kind, index) in variants {
            if let Some(index) = index {
                base = base.variant(kind, index);
                if kind.is_optional() {
                    base = base.present(kind, true);
                }
            }
        }

        for kind in &self.with {
            base = base.present(*kind, true);
        }
        // --without wins over an implied --with
        for kind in &self.without {
            base = base.present(*kind, false);
        }

        base
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    if let Some(kind) = args.traits.with.iter().chain(&args.traits.without).find(|k| !k.is_optional()) {
        return Err(MugshotError::Command {
            message: format!("'{}' is always present", kind),
            help: Some("--with and --without take optional traits: hair, glasses, beard, hat, jewellery, item, pin".to_string()),
        });
    }

    let discovery = discover_with_assets(&args.project, args.assets.as_deref())?;
    printer.status("Loading", &display_path(&discovery.assets));

    let catalog = discovery.load_catalog()?;
    let palette = discovery.palette()?;
    let mut config = discovery.config()?;
    if args.strict {
        config.policy = OverridePolicy::Strict;
    }

    let validation = validate_catalog(&catalog, &palette, &config);
    if validation.has_errors() {
        print_diagnostics(&validation);
        return Err(MugshotError::Command {
            message: "Asset catalog is invalid".to_string(),
            help: Some("Run `mugshot validate` for details".to_string()),
        });
    }
    for warning in validation.iter() {
        tracing::warn!(code = %warning.code, "{}", warning.message);
    }

    let base = match &args.replay {
        Some(path) => {
            printer.info("Replaying", &display_path(path));
            Overrides::from(&Selection::read(path)?)
        }
        None => Overrides::new(),
    };
    let overrides = args.traits.apply(base);

    let output = args.output.clone().unwrap_or_else(|| discovery.output_dir());
    create_output_dir(&output)?;

    let resize = args.resize.or(discovery.manifest.resize);
    let first_seed = args
        .seed
        .or(discovery.manifest.seed)
        .unwrap_or_else(|| rand::thread_rng().gen());

    let generator = Generator::new(&catalog, &palette).with_config(config);

    for i in 0..args.count {
        let seed = first_seed.wrapping_add(i as u64);
        let portrait = generator.generate_seeded(&overrides, seed)?;

        let path = output.join(portrait_filename(seed));
        write_png(&portrait.canvas, &path, resize)?;
        if args.record {
            portrait.selection.write(&path.with_extension("json"))?;
        }

        printer.status(
            "Generated",
            &format!("{} {}", display_path(&path), printer.dim(&portrait.selection.summary())),
        );
    }

    printer.success(
        "Finished",
        &format!("{} to {}", plural(args.count, "portrait", "portraits"), display_path(&output)),
    );

    Ok(())
}

/// File name of the portrait generated from `seed`.
pub fn portrait_filename(seed: u64) -> String {
    format!("mugshot-{}.png", seed)
}

fn create_output_dir(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| MugshotError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BodyPart;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_layer(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])).save(path).unwrap();
    }

    fn project() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let images = dir.path().join("images");
        for part in BodyPart::REQUIRED {
            write_layer(&images.join(format!("body/{}.png", part.file_stem())));
        }
        for kind in TraitKind::ALL {
            write_layer(&images.join(format!("{}/plain/fg.png", kind.directory())));
        }
        dir
    }

    fn args(project: &Path) -> GenerateArgs {
        GenerateArgs {
            project: project.to_path_buf(),
            assets: None,
            output: None,
            count: 1,
            seed: Some(10),
            replay: None,
            record: false,
            strict: false,
            resize: None,
            traits: TraitArgs::default(),
        }
    }

    #[test]
    fn test_apply_trait_args() {
        let traits = TraitArgs {
            skin: Some(0),
            hat: Some(2),
            with: vec![TraitKind::Glasses],
            without: vec![TraitKind::Hat],
            ..Default::default()
        };
        let overrides = traits.apply(Overrides::new());

        assert_eq!(
            overrides,
            Overrides::new()
                .colour(ColourRole::Skin, 0)
                .variant(TraitKind::Hat, 2)
                .present(TraitKind::Hat, false)
                .present(TraitKind::Glasses, true)
        );
    }

    #[test]
    fn test_apply_keeps_base() {
        let base = Overrides::new().variant(TraitKind::Eyes, 1).trousers_shade(3);
        let traits = TraitArgs {
            eyes: Some(0),
            ..Default::default()
        };
        let overrides = traits.apply(base);

        assert_eq!(overrides.variants.get(&TraitKind::Eyes), Some(&0));
        assert_eq!(overrides.trousers_shade, Some(3));
    }

    #[test]
    fn test_generate_batch() {
        let dir = project();
        let mut args = args(dir.path());
        args.count = 2;
        args.record = true;
        args.resize = Some(2);

        run(args, &Printer::new()).unwrap();

        let dist = dir.path().join("dist");
        for seed in [10, 11] {
            let png = dist.join(portrait_filename(seed));
            assert_eq!(image::open(&png).unwrap().to_rgba8().dimensions(), (2, 2));
            let record = Selection::read(&png.with_extension("json")).unwrap();
            assert_eq!(record.seed, Some(seed));
        }
    }

    #[test]
    fn test_replay_reproduces_portrait() {
        let dir = project();
        let mut first = args(dir.path());
        first.record = true;
        run(first, &Printer::new()).unwrap();

        let dist = dir.path().join("dist");
        let mut replay = args(dir.path());
        replay.seed = Some(99);
        replay.replay = Some(dist.join("mugshot-10.json"));
        run(replay, &Printer::new()).unwrap();

        let a = image::open(dist.join("mugshot-10.png")).unwrap().to_rgba8();
        let b = image::open(dist.join("mugshot-99.png")).unwrap().to_rgba8();
        assert!(a == b);
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let dir = tempdir().unwrap();
        for part in BodyPart::REQUIRED {
            write_layer(&dir.path().join(format!("images/body/{}.png", part.file_stem())));
        }

        assert!(run(args(dir.path()), &Printer::new()).is_err());
        assert!(!dir.path().join("dist").join(portrait_filename(10)).exists());
    }

    #[test]
    fn test_with_mandatory_trait_is_rejected() {
        let dir = project();
        let mut args = args(dir.path());
        args.traits.without = vec![TraitKind::Eyes];

        assert!(run(args, &Printer::new()).is_err());
    }
}
