//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover_with_assets;
use crate::error::{MugshotError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_catalog, Diagnostic, ValidationResult};

/// Validate the asset tree and palette without generating
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Project directory holding mugshot.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Asset tree to load (overrides the manifest)
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = discover_with_assets(&args.project, args.assets.as_deref())?;
    printer.status("Checking", &display_path(&discovery.assets));

    // Load failures are reported as diagnostics rather than aborting
    let loaded = discovery
        .load_catalog()
        .and_then(|catalog| Ok((catalog, discovery.palette()?, discovery.config()?)));
    let result = match loaded {
        Ok((catalog, palette, config)) => {
            printer.info(
                "Loaded",
                &plural(discovery.scan.total(), "layer", "layers"),
            );
            validate_catalog(&catalog, &palette, &config)
        }
        Err(e) => {
            let mut result = ValidationResult::new();
            result.push(Diagnostic::from_error(&e));
            result
        }
    };

    print_diagnostics(&result);

    if result.has_errors() {
        return Err(MugshotError::Command {
            message: format!("Validation failed with {}", plural(result.error_count(), "error", "errors")),
            help: None,
        });
    }

    Ok(())
}
