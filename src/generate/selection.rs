//! The per-run selection record.

use std::collections::BTreeMap;
use std::fs;
use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MugshotError, Result};
use crate::types::{Colour, ColourRole, TraitKind};

use super::generator::{BEARD_SHADE, TROUSERS_SHADE};

/// A chosen palette colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourChoice {
    pub index: usize,
    pub colour: Colour,
}

/// A chosen variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantChoice {
    pub index: usize,
    pub name: String,
}

/// Everything a single `generate` call decided.
///
/// Indices (not pixels) are the durable record: feeding a selection back
/// through [`Overrides::from`](super::Overrides) reproduces the portrait
/// against the same catalog and palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Seed of the run, when it was seeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    pub colours: BTreeMap<ColourRole, ColourChoice>,

    pub variants: BTreeMap<TraitKind, VariantChoice>,

    /// Presence flag of every optional trait.
    pub presence: BTreeMap<TraitKind, bool>,

    /// Offset applied to the shirt colour for the trousers.
    pub trousers_shade: i32,

    /// Offset applied to the beard base colour, when a beard was drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beard_shade: Option<i32>,

    pub trousers_colour: Colour,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beard_colour: Option<Colour>,
}

impl Selection {
    /// The colour chosen for a role.
    pub fn colour(&self, role: ColourRole) -> Option<Colour> {
        self.colours.get(&role).map(|c| c.colour)
    }

    /// The variant chosen for a category, if it was drawn.
    pub fn variant(&self, kind: TraitKind) -> Option<&VariantChoice> {
        self.variants.get(&kind)
    }

    /// Whether a trait appears in the portrait.
    pub fn is_present(&self, kind: TraitKind) -> bool {
        if kind.is_optional() {
            self.presence.get(&kind).copied().unwrap_or(false)
        } else {
            self.variants.contains_key(&kind)
        }
    }

    /// One-line summary for status output (`eyes=wide mouth=grin ...`).
    pub fn summary(&self) -> String {
        self.variants
            .iter()
            .map(|(kind, choice)| format!("{}={}", kind, choice.name))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MugshotError::Parse {
            message: format!("Failed to serialize selection: {}", e),
            help: None,
        })
    }

    /// Parse a JSON record.
    ///
    /// Shades outside the ranges a run can draw are rejected.
    pub fn from_json(content: &str) -> Result<Self> {
        let selection: Self = serde_json::from_str(content).map_err(|e| MugshotError::Parse {
            message: format!("Invalid selection record: {}", e),
            help: Some("Records are written by `mugshot generate --record`".to_string()),
        })?;

        check_shade("trousers_shade", selection.trousers_shade, &TROUSERS_SHADE)?;
        if let Some(shade) = selection.beard_shade {
            check_shade("beard_shade", shade, &BEARD_SHADE)?;
        }

        Ok(selection)
    }

    /// Write the record to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?).map_err(|e| MugshotError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write selection record: {}", e),
        })
    }

    /// Read a record from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MugshotError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read selection record: {}", e),
        })?;
        Self::from_json(&content)
    }
}

fn check_shade(field: &str, shade: i32, range: &Range<i32>) -> Result<()> {
    if range.contains(&shade) {
        return Ok(());
    }
    Err(MugshotError::Parse {
        message: format!("Invalid selection record: {} {} is outside {:?}", field, shade, range),
        help: None,
    })
}
