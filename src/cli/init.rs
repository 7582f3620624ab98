//! Init command implementation.
//!
//! Generates a starter `mugshot.yaml` manifest for an asset tree.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{scan_assets, BODY_DIR, MANIFEST_FILENAME};
use crate::error::{MugshotError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a mugshot project by generating a mugshot.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing mugshot.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    // Check for existing manifest
    if manifest_path.exists() && !args.force {
        return Err(MugshotError::Command {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let assets = detect_assets(&args.path);
    let assets_dir = args.path.join(&assets);
    let scan = scan_assets(&assets_dir);

    // Build YAML manually for clean formatting and comments
    let mut yaml = String::new();
    yaml.push_str(&format!("assets: {}\n", assets.display()));
    yaml.push_str("output: dist\n");
    yaml.push_str("\n# Fix the seed for reproducible batches\n# seed: 42\n");
    yaml.push_str("\n# Probability that each optional trait appears\npresence:\n");
    yaml.push_str("  hair: 0.9\n");
    for kind in ["glasses", "beard", "hat", "jewellery", "item", "pin"] {
        yaml.push_str(&format!("  {}: 0.5\n", kind));
    }
    yaml.push_str("\n# Relative variant weights by name (others weigh 1)\n# weights:\n#   eyes:\n#     wide: 2\n");
    yaml.push_str("\n# Shrink output to fit this many pixels\n# resize: 512\n");

    fs::write(&manifest_path, &yaml).map_err(|e| MugshotError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !scan.is_empty() {
        printer.info(
            "Discovered",
            &format!(
                "{} and {} in {}",
                plural(scan.body.len(), "body part", "body parts"),
                plural(scan.variants.len(), "variant", "variants"),
                display_path(&assets_dir)
            ),
        );
    }

    printer.success(
        "Created",
        &format!("{} ({} found)", MANIFEST_FILENAME, plural(scan.total(), "layer", "layers")),
    );

    Ok(())
}

/// Pick the asset root: `images/` by convention, or the project directory
/// itself when it already holds a `body/` directory.
fn detect_assets(root: &Path) -> PathBuf {
    let conventional = PathBuf::from("images");
    if root.join(&conventional).is_dir() {
        return conventional;
    }

    if root.join(BODY_DIR).is_dir() && !scan_assets(root).is_empty() {
        return PathBuf::from(".");
    }

    conventional
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Manifest;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn args(path: &Path, force: bool) -> InitArgs {
        InitArgs {
            path: path.to_path_buf(),
            force,
        }
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("images/body/body.png"));

        run(args(dir.path(), false), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("mugshot.yaml")).unwrap();
        assert!(content.contains("assets: images"));
        assert!(content.contains("output: dist"));
    }

    #[test]
    fn test_init_manifest_parses() {
        let dir = tempdir().unwrap();

        run(args(dir.path(), false), &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join("mugshot.yaml")).unwrap();
        assert_eq!(manifest.assets, PathBuf::from("images"));
        assert_eq!(manifest.presence.len(), 7);
        assert!(manifest.to_config().is_ok());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("mugshot.yaml"), "output: build").unwrap();

        let result = run(args(dir.path(), false), &Printer::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("mugshot.yaml"), "output: build").unwrap();

        run(args(dir.path(), true), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("mugshot.yaml")).unwrap();
        assert!(content.contains("output: dist"));
    }

    #[test]
    fn test_init_in_asset_tree() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("body/body.png"));

        run(args(dir.path(), false), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("mugshot.yaml")).unwrap();
        assert!(content.contains("assets: .\n"));
    }
}
