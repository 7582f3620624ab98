//! Project manifest (mugshot.yaml) parsing.
//!
//! The manifest defines project configuration including the asset tree,
//! output settings, generation stages and palette overrides.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MugshotError, Result};
use crate::generate::{GeneratorConfig, OverridePolicy, Stages};
use crate::types::{Colour, ColourRole, Palette, TraitKind, WeightedCatalog};

/// A weighted palette colour in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub colour: Colour,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Relative variant weights per category, keyed by variant name.
///
/// Variants left out weigh 1.
pub type VariantWeights = BTreeMap<TraitKind, BTreeMap<String, f64>>;

/// Project manifest loaded from mugshot.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Root of the asset tree.
    #[serde(default = "default_assets")]
    pub assets: PathBuf,

    /// Output directory for generated portraits.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Fixed seed for reproducible batches.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Fail on out-of-range override indices instead of drawing at random.
    #[serde(default)]
    pub strict_overrides: bool,

    #[serde(default)]
    pub stages: Stages,

    /// Probability that each optional trait is present.
    #[serde(default)]
    pub presence: BTreeMap<TraitKind, f64>,

    /// Replacement colours per palette role.
    #[serde(default)]
    pub palette: BTreeMap<ColourRole, Vec<PaletteEntry>>,

    /// Selection weights for trait variants.
    #[serde(default)]
    pub weights: VariantWeights,

    /// Maximum output dimension.
    #[serde(default)]
    pub resize: Option<u32>,
}

fn default_assets() -> PathBuf {
    PathBuf::from("images")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            assets: default_assets(),
            output: default_output(),
            seed: None,
            strict_overrides: false,
            stages: Stages::default(),
            presence: BTreeMap::new(),
            palette: BTreeMap::new(),
            weights: BTreeMap::new(),
            resize: None,
        }
    }
}

impl Manifest {
    /// Load manifest from a mugshot.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MugshotError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| MugshotError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check mugshot.yaml syntax".to_string()),
        })
    }

    /// Serialize the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| MugshotError::Parse {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Build the generator configuration described by the manifest.
    pub fn to_config(&self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig {
            stages: self.stages,
            policy: if self.strict_overrides {
                OverridePolicy::Strict
            } else {
                OverridePolicy::Fallback
            },
            ..GeneratorConfig::default()
        };

        for (kind, probability) in &self.presence {
            config.presence.set(*kind, *probability)?;
        }

        Ok(config)
    }

    /// Build the palette: the builtin defaults with manifest roles replaced.
    pub fn to_palette(&self) -> Result<Palette> {
        let mut palette = Palette::default();

        for (role, entries) in &self.palette {
            let (colours, weights): (Vec<Colour>, Vec<f64>) =
                entries.iter().map(|e| (e.colour, e.weight)).unzip();
            palette.set(*role, WeightedCatalog::new(role.name(), colours, weights)?);
        }

        Ok(palette)
    }

    /// Resolve the asset root against the project directory.
    pub fn assets_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.assets)
    }

    /// Resolve the output directory against the project directory.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}
