//! Trait and colour-role identifiers.
//!
//! Every selectable part of a portrait is addressed by one of these enums,
//! so per-trait tables are plain typed lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MugshotError, Result};

/// A trait category with its own list of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKind {
    Eyes,
    Mouth,
    Shirt,
    Trousers,
    Hair,
    Glasses,
    Beard,
    Hat,
    Jewellery,
    Item,
    Pin,
}

impl TraitKind {
    /// Every category, in resolution order.
    pub const ALL: [TraitKind; 11] = [
        TraitKind::Eyes,
        TraitKind::Mouth,
        TraitKind::Trousers,
        TraitKind::Shirt,
        TraitKind::Hair,
        TraitKind::Glasses,
        TraitKind::Beard,
        TraitKind::Hat,
        TraitKind::Jewellery,
        TraitKind::Item,
        TraitKind::Pin,
    ];

    /// Categories every portrait draws.
    pub const MANDATORY: [TraitKind; 4] = [
        TraitKind::Eyes,
        TraitKind::Mouth,
        TraitKind::Trousers,
        TraitKind::Shirt,
    ];

    /// Categories gated by a presence flag, in resolution order.
    pub const OPTIONAL: [TraitKind; 7] = [
        TraitKind::Hair,
        TraitKind::Glasses,
        TraitKind::Beard,
        TraitKind::Hat,
        TraitKind::Jewellery,
        TraitKind::Item,
        TraitKind::Pin,
    ];

    /// Get the short name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            TraitKind::Eyes => "eyes",
            TraitKind::Mouth => "mouth",
            TraitKind::Shirt => "shirt",
            TraitKind::Trousers => "trousers",
            TraitKind::Hair => "hair",
            TraitKind::Glasses => "glasses",
            TraitKind::Beard => "beard",
            TraitKind::Hat => "hat",
            TraitKind::Jewellery => "jewellery",
            TraitKind::Item => "item",
            TraitKind::Pin => "pin",
        }
    }

    /// Directory holding this category's variants in an asset tree.
    pub fn directory(&self) -> &'static str {
        match self {
            TraitKind::Eyes => "eyes",
            TraitKind::Mouth => "mouth",
            TraitKind::Shirt => "shirt",
            TraitKind::Trousers => "trousers",
            TraitKind::Hair => "hair",
            TraitKind::Glasses => "glasses",
            TraitKind::Beard => "beards",
            TraitKind::Hat => "hats",
            TraitKind::Jewellery => "jewellery",
            TraitKind::Item => "items",
            TraitKind::Pin => "pins",
        }
    }

    /// Whether this category is gated by a presence flag.
    pub fn is_optional(&self) -> bool {
        Self::OPTIONAL.contains(self)
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TraitKind {
    type Err = MugshotError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.directory() == s)
            .ok_or_else(|| MugshotError::Parse {
                message: format!("Unknown trait: {}", s),
                help: Some(format!(
                    "Expected one of: {}",
                    Self::ALL.map(|k| k.name()).join(", ")
                )),
            })
    }
}

/// A palette role: which colour list a tint is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourRole {
    Skin,
    Hair,
    Beard,
    Shirt,
}

impl ColourRole {
    pub const ALL: [ColourRole; 4] = [
        ColourRole::Skin,
        ColourRole::Hair,
        ColourRole::Beard,
        ColourRole::Shirt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColourRole::Skin => "skin",
            ColourRole::Hair => "hair",
            ColourRole::Beard => "beard",
            ColourRole::Shirt => "shirt",
        }
    }
}

impl fmt::Display for ColourRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ColourRole {
    type Err = MugshotError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| MugshotError::Parse {
                message: format!("Unknown colour role: {}", s),
                help: Some("Expected one of: skin, hair, beard, shirt".to_string()),
            })
    }
}
