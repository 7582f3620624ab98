//! Palette command implementation.
//!
//! Prints the colour roles of the effective palette with their weights.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{Colour, ColourRole, Palette};

/// Print the palette colours and weights
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Project directory holding mugshot.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Only print one role
    #[arg(long)]
    pub role: Option<ColourRole>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.project.join(MANIFEST_FILENAME);
    let palette = if manifest_path.exists() {
        Manifest::load(&manifest_path)?.to_palette()?
    } else {
        Palette::default()
    };

    for (role, colours) in palette.iter() {
        if args.role.is_some_and(|r| r != role) {
            continue;
        }

        printer.info(role.name(), &plural(colours.len(), "colour", "colours"));

        // Palette lines go to stdout
        for (line, colour) in role_lines(&palette, role) {
            println!("{}{}", printer.swatch(colour), line);
        }
    }

    Ok(())
}

/// `index  #RRGGBB  probability` lines of a role.
fn role_lines(palette: &Palette, role: ColourRole) -> Vec<(String, Colour)> {
    let colours = palette.role(role);
    colours
        .iter()
        .enumerate()
        .map(|(i, (colour, _))| {
            let p = colours.probability(i).unwrap_or(0.0);
            (format!(" {:>3}  {}  {:>5.1}%", i, colour, p * 100.0), *colour)
        })
        .collect()
}
