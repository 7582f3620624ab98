//! File system scanner for discovering portrait assets.
//!
//! Walks the asset tree (`body/` plus one directory per trait category)
//! and collects the PNG layers of every body part and variant.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::{BodyPart, TraitKind};

/// Directory holding the body parts.
pub const BODY_DIR: &str = "body";

/// Layer files of one variant directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFiles {
    pub kind: TraitKind,
    pub name: String,
    pub background: Vec<PathBuf>,
    pub foreground: Vec<PathBuf>,
}

impl VariantFiles {
    /// Total number of layer files.
    pub fn total(&self) -> usize {
        self.background.len() + self.foreground.len()
    }
}

/// Result of scanning an asset tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered body part files.
    pub body: Vec<(BodyPart, PathBuf)>,
    /// Discovered variants, grouped in category order.
    pub variants: Vec<VariantFiles>,
    /// PNG files that matched no known body part.
    pub unknown: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered layer files.
    pub fn total(&self) -> usize {
        self.body.len() + self.variants.iter().map(VariantFiles::total).sum::<usize>()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Get the variants of a category.
    pub fn variants_of(&self, kind: TraitKind) -> impl Iterator<Item = &VariantFiles> {
        self.variants.iter().filter(move |v| v.kind == kind)
    }

    /// Get the file of a body part.
    pub fn body_part(&self, part: BodyPart) -> Option<&Path> {
        self.body
            .iter()
            .find(|(p, _)| *p == part)
            .map(|(_, path)| path.as_path())
    }
}

/// Scan an asset tree.
///
/// Missing category directories yield no variants. Variants and layers are
/// ordered by file name.
pub fn scan_assets(root: &Path) -> ScanResult {
    let mut result = ScanResult::new();

    for path in png_files(&root.join(BODY_DIR)) {
        match file_stem(&path).and_then(BodyPart::from_file_stem) {
            Some(part) => result.body.push((part, path)),
            None => result.unknown.push(path),
        }
    }

    for kind in TraitKind::ALL {
        for dir in subdirectories(&root.join(kind.directory())) {
            result.variants.push(scan_variant(kind, &dir));
        }
    }

    result
}

/// Collect the layers of one variant directory.
pub fn scan_variant(kind: TraitKind, dir: &Path) -> VariantFiles {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (background, foreground) = png_files(dir).into_iter().partition(|path| is_background(path));

    VariantFiles {
        kind,
        name,
        background,
        foreground,
    }
}

/// Check if a layer file is a background layer (its name contains `bg`).
pub fn is_background(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.contains("bg"))
        .unwrap_or(false)
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem()?.to_str()
}

/// PNG files directly inside a directory, sorted by name.
fn png_files(dir: &Path) -> Vec<PathBuf> {
    entries(dir)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("png"))
                .unwrap_or(false)
        })
        .collect()
}

/// Subdirectories directly inside a directory, sorted by name.
fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    entries(dir)
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect()
}

fn entries(dir: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_is_background() {
        assert!(is_background(Path::new("hair/long/bg.png")));
        assert!(is_background(Path::new("shirt/tee/shirt_bg_1.png")));
        assert!(!is_background(Path::new("hair/long/fg.png")));
        assert!(!is_background(Path::new("eyes/wide/eyes.png")));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_assets(dir.path());

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_assets(Path::new("/nonexistent/path"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_body_parts() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "body/body.png");
        touch(dir.path(), "body/underware.png");
        touch(dir.path(), "body/hands_item_bg.png");
        touch(dir.path(), "body/tail.png");
        touch(dir.path(), "body/notes.txt");

        let result = scan_assets(dir.path());

        assert_eq!(result.body.len(), 3);
        assert!(result.body_part(BodyPart::Underwear).is_some());
        assert!(result.body_part(BodyPart::HandsItemBg).is_some());
        assert!(result.body_part(BodyPart::Head).is_none());
        assert_eq!(result.unknown.len(), 1);
    }

    #[test]
    fn test_scan_variants_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "hair/short/fg.png");
        touch(dir.path(), "hair/long/fg_2.png");
        touch(dir.path(), "hair/long/fg_1.png");
        touch(dir.path(), "hair/long/bg.png");
        touch(dir.path(), "beards/goatee/fg.png");
        touch(dir.path(), "hair/stray.png");

        let result = scan_assets(dir.path());
        let hair: Vec<&VariantFiles> = result.variants_of(TraitKind::Hair).collect();

        assert_eq!(hair.len(), 2);
        assert_eq!(hair[0].name, "long");
        assert_eq!(hair[0].background.len(), 1);
        assert_eq!(
            hair[0].foreground,
            vec![dir.path().join("hair/long/fg_1.png"), dir.path().join("hair/long/fg_2.png")]
        );
        assert_eq!(hair[1].name, "short");
        assert_eq!(result.variants_of(TraitKind::Beard).count(), 1);
        assert_eq!(result.variants_of(TraitKind::Hat).count(), 0);
    }

    #[test]
    fn test_empty_variant_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("glasses/none")).unwrap();

        let result = scan_assets(dir.path());
        let glasses: Vec<&VariantFiles> = result.variants_of(TraitKind::Glasses).collect();

        assert_eq!(glasses.len(), 1);
        assert_eq!(glasses[0].total(), 0);
    }
}
