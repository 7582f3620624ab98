//! Validation system for portrait asset catalogs.
//!
//! Runs a suite of checks against a loaded catalog and palette and reports
//! errors and warnings. Used by `mugshot validate` and before batch
//! generation.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::generate::GeneratorConfig;
use crate::types::{Catalog, Palette};

/// Run all validation checks.
///
/// The config decides which palette roles a run actually reads.
pub fn validate_catalog(catalog: &Catalog, palette: &Palette, config: &GeneratorConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_categories(catalog));
    result.merge(checks::check_variant_layers(catalog));
    result.merge(checks::check_layer_sizes(catalog));
    result.merge(checks::check_palette(palette, config));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}", d);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!("Validation failed: {} error(s), {} warning(s)", errors, warnings);
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}
