//! Validation checks for a loaded catalog and palette.
//!
//! Each check returns a `ValidationResult`.

use crate::generate::{BeardColour, GeneratorConfig};
use crate::types::{Catalog, ColourRole, Palette, TraitKind};

use super::warning::{Diagnostic, ValidationResult};

/// Categories whose variants must have a foreground layer to be drawn.
const NEEDS_FOREGROUND: [TraitKind; 4] = [
    TraitKind::Eyes,
    TraitKind::Mouth,
    TraitKind::Glasses,
    TraitKind::Beard,
];

/// Categories where a variant with no layers draws nothing at all.
const NEEDS_ANY_LAYER: [TraitKind; 3] = [TraitKind::Hair, TraitKind::Shirt, TraitKind::Trousers];

/// Check that mandatory categories have variants and flag empty optional ones.
pub fn check_categories(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for kind in TraitKind::ALL {
        if catalog.count(kind) > 0 {
            continue;
        }

        let help = format!("Add a variant directory under {}/", kind.directory());
        if kind.is_optional() {
            result.push(
                Diagnostic::warning(
                    "mugshot::validate::empty-category",
                    format!("Optional category '{}' has no variants and will never appear", kind),
                )
                .with_help(help),
            );
        } else {
            result.push(
                Diagnostic::error(
                    "mugshot::validate::empty-category",
                    format!("Category '{}' has no variants", kind),
                )
                .with_help(help),
            );
        }
    }

    result
}

/// Check for variants missing the layers their draw step needs.
pub fn check_variant_layers(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for kind in NEEDS_FOREGROUND {
        for (variant, _) in catalog.variants(kind).iter() {
            if variant.foreground.is_empty() {
                result.push(
                    Diagnostic::error(
                        "mugshot::validate::missing-foreground",
                        format!("Variant '{}/{}' has no foreground layer", kind, variant.name),
                    )
                    .with_help("Add a layer whose file name does not contain 'bg'"),
                );
            }
        }
    }

    for kind in NEEDS_ANY_LAYER {
        for (variant, _) in catalog.variants(kind).iter() {
            if variant.is_empty() {
                result.warning(
                    "mugshot::validate::empty-variant",
                    format!("Variant '{}/{}' has no layers", kind, variant.name),
                );
            }
        }
    }

    result
}

/// Check that every layer matches the canvas size.
pub fn check_layer_sizes(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();
    let (width, height) = catalog.canvas_size();

    for (label, layer) in catalog.layers() {
        if layer.size() != (width, height) {
            result.push(
                Diagnostic::error(
                    "mugshot::validate::size-mismatch",
                    format!(
                        "Layer '{}' is {}x{}, canvas is {}x{}",
                        label,
                        layer.width(),
                        layer.height(),
                        width,
                        height
                    ),
                )
                .with_help("Export every layer at the canvas size"),
            );
        }
    }

    result
}

/// Check that every palette role has colours.
pub fn check_palette(palette: &Palette, config: &GeneratorConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (role, colours) in palette.iter() {
        if !colours.is_empty() {
            continue;
        }

        let message = format!("Palette role '{}' has no colours", role);
        let help = format!("Add colours under palette.{} in mugshot.yaml", role);

        // Beards only read their own role when coloured from the palette
        let unused = role == ColourRole::Beard && config.stages.beard_colour == BeardColour::Hair;
        let diagnostic = if unused {
            Diagnostic::warning("mugshot::validate::empty-palette-role", message)
        } else {
            Diagnostic::error("mugshot::validate::empty-palette-role", message)
        };
        result.push(diagnostic.with_help(help));
    }

    result
}
