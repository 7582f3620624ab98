//! Asset loader - decodes scanned layer files into a catalog.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::{MugshotError, Result};
use crate::types::{BodyPart, BodyParts, Catalog, Layer, TraitKind, Variant};

use super::manifest::VariantWeights;
use super::scanner::{scan_assets, ScanResult, VariantFiles};

/// Decode a PNG layer as RGBA.
pub fn load_layer(path: &Path) -> Result<Layer> {
    let image = image::open(path).map_err(|e| MugshotError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to decode layer: {}", e),
    })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Layer::new(name, image.to_rgba8()))
}

/// Scan and load the asset tree rooted at `root`.
pub fn load_catalog(root: &Path) -> Result<Catalog> {
    if !root.is_dir() {
        return Err(MugshotError::Io {
            path: root.to_path_buf(),
            message: "Asset directory not found".to_string(),
        });
    }

    load_scanned(&scan_assets(root))
}

/// Load a catalog from an existing scan, with uniform variant weights.
pub fn load_scanned(scan: &ScanResult) -> Result<Catalog> {
    load_weighted(scan, &VariantWeights::new())
}

/// Load a catalog from an existing scan.
///
/// Every layer must match the size of the body layer; the first mismatch
/// fails with the offending file's path. Weights naming a variant the scan
/// did not find are rejected.
pub fn load_weighted(scan: &ScanResult, weights: &VariantWeights) -> Result<Catalog> {
    let mut parts = HashMap::new();
    for (part, path) in &scan.body {
        parts.insert(*part, load_layer(path)?);
    }

    let body = BodyParts::assemble(parts)?;
    let size = body.body.size();

    for (part, layer) in body.iter() {
        if part != BodyPart::Body {
            if let Some(path) = scan.body_part(part) {
                check_size(path, layer, size)?;
            }
        }
    }

    let mut builder = Catalog::builder(body);
    for files in &scan.variants {
        builder.add_variant(load_variant(files, size)?);
    }
    for (kind, named) in weights {
        builder.weights(*kind, variant_weights(scan, *kind, named)?);
    }
    let catalog = builder.build()?;

    tracing::info!(
        width = size.0,
        height = size.1,
        variants = scan.variants.len(),
        layers = scan.total(),
        "Loaded catalog"
    );

    Ok(catalog)
}

fn load_variant(files: &VariantFiles, size: (u32, u32)) -> Result<Variant> {
    let mut variant = Variant::new(files.kind, files.name.clone());

    for path in &files.background {
        let layer = load_layer(path)?;
        check_size(path, &layer, size)?;
        variant.background.push(layer);
    }
    for path in &files.foreground {
        let layer = load_layer(path)?;
        check_size(path, &layer, size)?;
        variant.foreground.push(layer);
    }

    tracing::debug!(
        kind = %files.kind,
        variant = %files.name,
        background = variant.background.len(),
        foreground = variant.foreground.len(),
        "Loaded variant"
    );

    Ok(variant)
}

/// Expand named weights into a list parallel to the scanned variants.
fn variant_weights(scan: &ScanResult, kind: TraitKind, named: &BTreeMap<String, f64>) -> Result<Vec<f64>> {
    let names: Vec<&str> = scan.variants_of(kind).map(|v| v.name.as_str()).collect();

    if let Some(unknown) = named.keys().find(|name| !names.contains(&name.as_str())) {
        return Err(MugshotError::Parse {
            message: format!("Unknown {} variant in weights: {}", kind, unknown),
            help: Some(format!("Variants found under {}/: {}", kind.directory(), names.join(", "))),
        });
    }

    Ok(names
        .iter()
        .map(|name| named.get(*name).copied().unwrap_or(1.0))
        .collect())
}

fn check_size(path: &Path, layer: &Layer, (width, height): (u32, u32)) -> Result<()> {
    if layer.size() == (width, height) {
        return Ok(());
    }

    Err(MugshotError::DimensionMismatch {
        layer: path.display().to_string(),
        width,
        height,
        actual_width: layer.width(),
        actual_height: layer.height(),
    })
}
