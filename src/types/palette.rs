//! Palette: weighted colour lists per colour role.

use std::collections::BTreeMap;

use super::{Colour, ColourRole, WeightedCatalog};

const SKIN: [(Colour, f64); 5] = [
    (Colour::rgb(254, 218, 181), 0.35),
    (Colour::rgb(253, 203, 162), 0.25),
    (Colour::rgb(213, 168, 125), 0.15),
    (Colour::rgb(119, 95, 79), 0.15),
    (Colour::rgb(231, 156, 113), 0.10),
];

const HAIR: [Colour; 11] = [
    Colour::rgb(230, 230, 230),
    Colour::rgb(132, 111, 88),
    Colour::rgb(250, 255, 65),
    Colour::rgb(204, 153, 51),
    Colour::rgb(255, 151, 63),
    Colour::rgb(22, 19, 22),
    Colour::rgb(93, 67, 48),
    Colour::rgb(142, 82, 2),
    Colour::rgb(149, 99, 27),
    Colour::rgb(136, 119, 107),
    Colour::rgb(131, 118, 119),
];

const SHIRT: [Colour; 12] = [
    Colour::rgb(63, 56, 68),
    Colour::rgb(240, 243, 242),
    Colour::rgb(81, 24, 73),
    Colour::rgb(199, 0, 57),
    Colour::rgb(249, 81, 53),
    Colour::rgb(255, 141, 26),
    Colour::rgb(255, 195, 0),
    Colour::rgb(237, 221, 83),
    Colour::rgb(173, 212, 92),
    Colour::rgb(87, 199, 133),
    Colour::rgb(0, 186, 173),
    Colour::rgb(42, 123, 155),
];

/// Candidate colours for every [`ColourRole`].
///
/// Like the catalog, a palette is read-only during generation; the
/// per-run choice lives in the generator's selection record.
#[derive(Debug, Clone)]
pub struct Palette {
    roles: BTreeMap<ColourRole, WeightedCatalog<Colour>>,
}

impl Palette {
    /// Create a palette where every role is empty.
    pub fn empty() -> Self {
        let roles = ColourRole::ALL
            .into_iter()
            .map(|role| (role, WeightedCatalog::uniform(role.name(), Vec::new())))
            .collect();
        Self { roles }
    }

    /// Create the builtin default palette.
    pub fn default_palette() -> Self {
        let mut palette = Self::empty();

        let (skin, skin_weights): (Vec<Colour>, Vec<f64>) = SKIN.into_iter().unzip();
        palette.set(
            ColourRole::Skin,
            WeightedCatalog::from_builtin(ColourRole::Skin.name(), skin, skin_weights),
        );
        palette.set(
            ColourRole::Hair,
            WeightedCatalog::uniform(ColourRole::Hair.name(), HAIR.to_vec()),
        );
        palette.set(
            ColourRole::Beard,
            WeightedCatalog::uniform(ColourRole::Beard.name(), HAIR.to_vec()),
        );
        palette.set(
            ColourRole::Shirt,
            WeightedCatalog::uniform(ColourRole::Shirt.name(), SHIRT.to_vec()),
        );
        palette
    }

    /// Replace the colours of a role.
    pub fn set(&mut self, role: ColourRole, colours: WeightedCatalog<Colour>) {
        self.roles.insert(role, colours);
    }

    /// Get the colours of a role.
    pub fn role(&self, role: ColourRole) -> &WeightedCatalog<Colour> {
        &self.roles[&role]
    }

    /// Iterate over every role and its colours.
    pub fn iter(&self) -> impl Iterator<Item = (ColourRole, &WeightedCatalog<Colour>)> {
        self.roles.iter().map(|(role, colours)| (*role, colours))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_palette()
    }
}
