//! Caller-supplied pins for a generation run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{ColourRole, TraitKind};

use super::Selection;

/// Forced choices for a run. Anything left unset is drawn at random.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Palette index per colour role.
    pub colours: BTreeMap<ColourRole, usize>,
    /// Variant index per category.
    pub variants: BTreeMap<TraitKind, usize>,
    /// Forced presence of optional traits.
    pub presence: BTreeMap<TraitKind, bool>,
    /// Forced trousers offset.
    pub trousers_shade: Option<i32>,
    /// Forced beard offset.
    pub beard_shade: Option<i32>,
}

impl Overrides {
    /// No overrides: everything random.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a palette colour by index.
    pub fn colour(mut self, role: ColourRole, index: usize) -> Self {
        self.colours.insert(role, index);
        self
    }

    /// Pin a variant by index.
    pub fn variant(mut self, kind: TraitKind, index: usize) -> Self {
        self.variants.insert(kind, index);
        self
    }

    /// Force an optional trait on or off.
    pub fn present(mut self, kind: TraitKind, present: bool) -> Self {
        self.presence.insert(kind, present);
        self
    }

    /// Force the trousers offset. The resulting colour is still clamped.
    pub fn trousers_shade(mut self, shade: i32) -> Self {
        self.trousers_shade = Some(shade);
        self
    }

    /// Force the beard offset.
    pub fn beard_shade(mut self, shade: i32) -> Self {
        self.beard_shade = Some(shade);
        self
    }

    /// Check if nothing is pinned.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&Selection> for Overrides {
    fn from(selection: &Selection) -> Self {
        Self {
            colours: selection
                .colours
                .iter()
                .map(|(role, choice)| (*role, choice.index))
                .collect(),
            variants: selection
                .variants
                .iter()
                .map(|(kind, choice)| (*kind, choice.index))
                .collect(),
            presence: selection.presence.clone(),
            trousers_shade: Some(selection.trousers_shade),
            beard_shade: selection.beard_shade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{ColourChoice, VariantChoice};
    use crate::types::Colour;

    #[test]
    fn test_builder_methods() {
        let overrides = Overrides::new()
            .colour(ColourRole::Skin, 0)
            .variant(TraitKind::Hair, 2)
            .present(TraitKind::Glasses, false)
            .trousers_shade(-5);

        assert_eq!(overrides.colours.get(&ColourRole::Skin), Some(&0));
        assert_eq!(overrides.variants.get(&TraitKind::Hair), Some(&2));
        assert_eq!(overrides.presence.get(&TraitKind::Glasses), Some(&false));
        assert_eq!(overrides.trousers_shade, Some(-5));
        assert!(!overrides.is_empty());
        assert!(Overrides::new().is_empty());
    }

    #[test]
    fn test_from_selection_pins_everything() {
        let mut selection = Selection {
            trousers_shade: 7,
            beard_shade: Some(30),
            ..Default::default()
        };
        selection.colours.insert(
            ColourRole::Hair,
            ColourChoice {
                index: 4,
                colour: Colour::rgb(255, 151, 63),
            },
        );
        selection.variants.insert(
            TraitKind::Beard,
            VariantChoice {
                index: 1,
                name: "goatee".to_string(),
            },
        );
        selection.presence.insert(TraitKind::Beard, true);

        let overrides = Overrides::from(&selection);
        assert_eq!(overrides.colours.get(&ColourRole::Hair), Some(&4));
        assert_eq!(overrides.variants.get(&TraitKind::Beard), Some(&1));
        assert_eq!(overrides.presence.get(&TraitKind::Beard), Some(&true));
        assert_eq!(overrides.trousers_shade, Some(7));
        assert_eq!(overrides.beard_shade, Some(30));
    }
}
