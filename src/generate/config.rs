//! Generator configuration: pipeline stages and presence odds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MugshotError, Result};
use crate::types::{presence, TraitKind, WeightedCatalog};

use super::OverridePolicy;

/// Where the beard's base colour comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeardColour {
    /// Follow the hair colour.
    #[default]
    Hair,
    /// Draw from the palette's beard role.
    Palette,
}

/// Independently toggleable optional stages of the pipeline.
///
/// A disabled stage is never drawn and its presence flag is not sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stages {
    pub hair: bool,
    pub glasses: bool,
    pub beard: bool,
    pub hat: bool,
    pub jewellery: bool,
    pub item: bool,
    pub pin: bool,
    pub beard_colour: BeardColour,
}

impl Default for Stages {
    fn default() -> Self {
        Self {
            hair: true,
            glasses: true,
            beard: true,
            hat: true,
            jewellery: true,
            item: true,
            pin: true,
            beard_colour: BeardColour::Hair,
        }
    }
}

impl Stages {
    /// Whether a category can appear. Mandatory categories always can.
    pub fn enabled(&self, kind: TraitKind) -> bool {
        match kind {
            TraitKind::Hair => self.hair,
            TraitKind::Glasses => self.glasses,
            TraitKind::Beard => self.beard,
            TraitKind::Hat => self.hat,
            TraitKind::Jewellery => self.jewellery,
            TraitKind::Item => self.item,
            TraitKind::Pin => self.pin,
            TraitKind::Eyes | TraitKind::Mouth | TraitKind::Shirt | TraitKind::Trousers => true,
        }
    }

    /// Enable or disable an optional stage. Mandatory categories are ignored.
    pub fn set(&mut self, kind: TraitKind, enabled: bool) {
        let flag = match kind {
            TraitKind::Hair => &mut self.hair,
            TraitKind::Glasses => &mut self.glasses,
            TraitKind::Beard => &mut self.beard,
            TraitKind::Hat => &mut self.hat,
            TraitKind::Jewellery => &mut self.jewellery,
            TraitKind::Item => &mut self.item,
            TraitKind::Pin => &mut self.pin,
            TraitKind::Eyes | TraitKind::Mouth | TraitKind::Shirt | TraitKind::Trousers => return,
        };
        *flag = enabled;
    }
}

/// Presence odds of every optional trait, as `[false, true]` catalogs.
#[derive(Debug, Clone)]
pub struct PresenceWeights {
    flags: BTreeMap<TraitKind, WeightedCatalog<bool>>,
}

impl PresenceWeights {
    /// Hair appears 90% of the time, every other optional trait 50%.
    pub fn new() -> Self {
        let flags = TraitKind::OPTIONAL
            .into_iter()
            .map(|kind| {
                let p = if kind == TraitKind::Hair { 0.9 } else { 0.5 };
                let weights = vec![1.0 - p, p];
                (kind, WeightedCatalog::from_builtin(format!("has_{}", kind), vec![false, true], weights))
            })
            .collect();
        Self { flags }
    }

    /// Set the probability that an optional trait is present.
    pub fn set(&mut self, kind: TraitKind, probability: f64) -> Result<()> {
        if !kind.is_optional() {
            return Err(MugshotError::Parse {
                message: format!("'{}' is always present and has no presence odds", kind),
                help: Some("Only optional traits (hair, glasses, beard, hat, jewellery, item, pin) take presence odds".to_string()),
            });
        }
        self.flags.insert(kind, presence(format!("has_{}", kind), probability)?);
        Ok(())
    }

    /// The presence flag catalog of an optional trait.
    pub fn flag(&self, kind: TraitKind) -> Option<&WeightedCatalog<bool>> {
        self.flags.get(&kind)
    }

    /// Probability that an optional trait is present.
    pub fn probability(&self, kind: TraitKind) -> Option<f64> {
        self.flag(kind).and_then(|flag| flag.probability(1))
    }
}

impl Default for PresenceWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything that shapes generation besides the catalog and palette.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub stages: Stages,
    pub presence: PresenceWeights,
    pub policy: OverridePolicy,
}
