//! List command implementation.
//!
//! Discovers the asset tree and prints an inventory of variants.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover_with_assets;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::{Catalog, TraitKind};

/// List the variants of every trait category
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project directory holding mugshot.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Asset tree to load (overrides the manifest)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Show layer counts per variant
    #[arg(long)]
    pub layers: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let discovery = discover_with_assets(&args.project, args.assets.as_deref())?;
    let catalog = discovery.load_catalog()?;

    let (width, height) = catalog.canvas_size();
    printer.info(
        "Canvas",
        &format!("{}x{} from {}", width, height, display_path(&discovery.assets)),
    );

    for line in inventory(&catalog, args.layers) {
        printer.info(&line.0, &line.1);
    }

    Ok(())
}

/// One `(label, variants)` line per category, with variant indices.
fn inventory(catalog: &Catalog, layers: bool) -> Vec<(String, String)> {
    TraitKind::ALL
        .into_iter()
        .map(|kind| {
            let variants = catalog.variants(kind);
            let names: Vec<String> = variants
                .items()
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    if layers {
                        format!("{}:{} ({}+{})", i, v.name, v.background.len(), v.foreground.len())
                    } else {
                        format!("{}:{}", i, v.name)
                    }
                })
                .collect();

            let summary = if names.is_empty() {
                "(none)".to_string()
            } else {
                format!("{} - {}", plural(names.len(), "variant", "variants"), names.join(", "))
            };
            (kind.to_string(), summary)
        })
        .collect()
}
