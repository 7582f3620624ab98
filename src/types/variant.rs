//! Trait variants and fixed body parts.

use std::collections::HashMap;
use std::fmt;

use crate::error::{MugshotError, Result};

use super::{Layer, TraitKind};

/// One option of a trait category: a named bundle of layers.
///
/// Background layers are tint targets; foreground layers (outlines, shading)
/// are drawn as-is on top of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: String,
    pub kind: TraitKind,
    pub background: Vec<Layer>,
    pub foreground: Vec<Layer>,
}

impl Variant {
    /// Create a variant with no layers.
    pub fn new(kind: TraitKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            background: Vec::new(),
            foreground: Vec::new(),
        }
    }

    /// Append a background layer.
    pub fn with_background(mut self, layer: Layer) -> Self {
        self.background.push(layer);
        self
    }

    /// Append a foreground layer.
    pub fn with_foreground(mut self, layer: Layer) -> Self {
        self.foreground.push(layer);
        self
    }

    /// The first foreground layer, for traits drawn from a single sheet.
    pub fn first_foreground(&self) -> Result<&Layer> {
        self.foreground.first().ok_or_else(|| MugshotError::MissingLayer {
            category: self.kind.to_string(),
            variant: self.name.clone(),
            slot: "foreground",
        })
    }

    /// All layers, background first.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.background.iter().chain(&self.foreground)
    }

    /// Check if the variant has no layers at all.
    pub fn is_empty(&self) -> bool {
        self.background.is_empty() && self.foreground.is_empty()
    }
}

/// The always-drawn body layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Body,
    Head,
    Chin,
    Arms,
    Feet,
    HandsBg,
    HandsFg,
    HandsItemBg,
    HandsItemFg,
    Underwear,
}

impl BodyPart {
    /// Parts every asset tree must provide.
    pub const REQUIRED: [BodyPart; 9] = [
        BodyPart::Body,
        BodyPart::Head,
        BodyPart::Chin,
        BodyPart::Arms,
        BodyPart::Feet,
        BodyPart::HandsBg,
        BodyPart::HandsFg,
        BodyPart::HandsItemBg,
        BodyPart::HandsItemFg,
    ];

    /// File stem of this part inside the `body/` directory.
    pub fn file_stem(&self) -> &'static str {
        match self {
            BodyPart::Body => "body",
            BodyPart::Head => "head",
            BodyPart::Chin => "chin",
            BodyPart::Arms => "arms",
            BodyPart::Feet => "feet",
            BodyPart::HandsBg => "hands_bg",
            BodyPart::HandsFg => "hands_fg",
            BodyPart::HandsItemBg => "hands_item_bg",
            BodyPart::HandsItemFg => "hands_item_fg",
            BodyPart::Underwear => "underware",
        }
    }

    /// Look up a part by file stem.
    pub fn from_file_stem(stem: &str) -> Option<Self> {
        Self::REQUIRED
            .into_iter()
            .chain([BodyPart::Underwear])
            .find(|part| part.file_stem() == stem)
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_stem())
    }
}

/// The fixed body layers of a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyParts {
    pub body: Layer,
    pub head: Layer,
    pub chin: Layer,
    pub arms: Layer,
    pub feet: Layer,
    pub hands_bg: Layer,
    pub hands_fg: Layer,
    pub hands_item_bg: Layer,
    pub hands_item_fg: Layer,
    /// Loaded when present; not part of the draw order.
    pub underwear: Option<Layer>,
}

impl BodyParts {
    /// Assemble body parts from loose layers, failing on the first missing
    /// required part.
    pub fn assemble(mut layers: HashMap<BodyPart, Layer>) -> Result<Self> {
        let mut take = |part: BodyPart| {
            layers.remove(&part).ok_or_else(|| MugshotError::MissingBodyPart {
                part: part.to_string(),
                help: Some(format!("Add body/{}.png to the asset tree", part.file_stem())),
            })
        };

        Ok(Self {
            body: take(BodyPart::Body)?,
            head: take(BodyPart::Head)?,
            chin: take(BodyPart::Chin)?,
            arms: take(BodyPart::Arms)?,
            feet: take(BodyPart::Feet)?,
            hands_bg: take(BodyPart::HandsBg)?,
            hands_fg: take(BodyPart::HandsFg)?,
            hands_item_bg: take(BodyPart::HandsItemBg)?,
            hands_item_fg: take(BodyPart::HandsItemFg)?,
            underwear: take(BodyPart::Underwear).ok(),
        })
    }

    /// Get a part's layer.
    pub fn get(&self, part: BodyPart) -> Option<&Layer> {
        match part {
            BodyPart::Body => Some(&self.body),
            BodyPart::Head => Some(&self.head),
            BodyPart::Chin => Some(&self.chin),
            BodyPart::Arms => Some(&self.arms),
            BodyPart::Feet => Some(&self.feet),
            BodyPart::HandsBg => Some(&self.hands_bg),
            BodyPart::HandsFg => Some(&self.hands_fg),
            BodyPart::HandsItemBg => Some(&self.hands_item_bg),
            BodyPart::HandsItemFg => Some(&self.hands_item_fg),
            BodyPart::Underwear => self.underwear.as_ref(),
        }
    }

    /// Iterate over every present part.
    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, &Layer)> {
        BodyPart::REQUIRED
            .into_iter()
            .chain([BodyPart::Underwear])
            .filter_map(|part| self.get(part).map(|layer| (part, layer)))
    }
}
