//! Asset discovery and loading for mugshot projects.
//!
//! This module handles finding the asset tree of a project directory,
//! reading the optional `mugshot.yaml` manifest, and decoding every layer
//! into a [`Catalog`].
//!
//! # Example
//!
//! ```ignore
//! use mugshot::discovery::discover;
//!
//! let project = discover(".")?;
//! println!("Found {} layers", project.scan.total());
//!
//! let catalog = project.load_catalog()?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::generate::GeneratorConfig;
use crate::types::{Catalog, Palette};

pub use loader::{load_catalog, load_layer, load_scanned, load_weighted};
pub use manifest::{Manifest, PaletteEntry, VariantWeights};
pub use scanner::{is_background, scan_assets, scan_variant, ScanResult, VariantFiles, BODY_DIR};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "mugshot.yaml";

/// Result of discovering a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no mugshot.yaml found).
    pub manifest: Manifest,

    /// Whether a mugshot.yaml manifest was found.
    pub has_manifest: bool,

    /// The asset tree that was scanned.
    pub assets: PathBuf,

    /// Scan results with discovered layer files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Decode every discovered layer into a catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        load_weighted(&self.scan, &self.manifest.weights)
    }

    /// The palette described by the manifest.
    pub fn palette(&self) -> Result<Palette> {
        self.manifest.to_palette()
    }

    /// The generator configuration described by the manifest.
    pub fn config(&self) -> Result<GeneratorConfig> {
        self.manifest.to_config()
    }

    /// The output directory, relative to the project root.
    pub fn output_dir(&self) -> PathBuf {
        self.manifest.output_dir(&self.root)
    }
}

/// Discover a project.
///
/// Looks for a `mugshot.yaml` manifest in the root directory and scans the
/// asset tree it names (`images/` by default).
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    discover_with_assets(root, None)
}

/// Discover a project, scanning `assets` instead of the manifest's tree.
///
/// A relative `assets` path is resolved against the working directory,
/// the manifest's against the project root.
pub fn discover_with_assets(root: impl AsRef<Path>, assets: Option<&Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    // Look for manifest
    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let assets = match assets {
        Some(path) => path.to_path_buf(),
        None => manifest.assets_dir(&root),
    };

    tracing::debug!(
        root = %root.display(),
        assets = %assets.display(),
        has_manifest,
        "Discovering assets"
    );

    let scan = scan_assets(&assets);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        assets,
        scan,
    })
}
