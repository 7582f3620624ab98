//! Portrait generator - resolves traits and drives the compositor.

use std::collections::BTreeMap;
use std::ops::Range;

use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::render::Compositor;
use crate::types::{Catalog, Colour, ColourRole, Palette, TraitKind, Variant};

use super::config::{BeardColour, GeneratorConfig};
use super::plan::{draw_plan, Hands, Look};
use super::selection::{ColourChoice, Selection, VariantChoice};
use super::{Overrides, Selector};

/// Offset range applied to the shirt colour to get the trousers colour.
pub(crate) const TROUSERS_SHADE: Range<i32> = -50..50;
const TROUSERS_CLAMP: (u8, u8) = (10, 250);

/// Offset range lightening the beard. Channels stay below the 255 marker.
pub(crate) const BEARD_SHADE: Range<i32> = 0..50;
const BEARD_CLAMP: (u8, u8) = (0, 254);

/// A finished portrait and the choices that produced it.
#[derive(Debug, Clone)]
pub struct Portrait {
    pub canvas: RgbaImage,
    pub selection: Selection,
}

/// Generates portraits from a shared catalog and palette.
///
/// The generator only borrows read-only data, so one instance can serve
/// any number of threads; every call owns its own selection and canvas.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    catalog: &'a Catalog,
    palette: &'a Palette,
    config: GeneratorConfig,
    selector: Selector,
    compositor: Compositor,
}

impl<'a> Generator<'a> {
    /// Create a generator with the default configuration.
    pub fn new(catalog: &'a Catalog, palette: &'a Palette) -> Self {
        let (width, height) = catalog.canvas_size();
        Self {
            catalog,
            palette,
            config: GeneratorConfig::default(),
            selector: Selector::default(),
            compositor: Compositor::new(width, height),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.selector = Selector::new(config.policy);
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The catalog portraits are drawn from.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Generate a portrait with a fresh RNG seeded from `seed`.
    pub fn generate_seeded(&self, overrides: &Overrides, seed: u64) -> Result<Portrait> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut portrait = self.generate(overrides, &mut rng)?;
        portrait.selection.seed = Some(seed);
        Ok(portrait)
    }

    /// Generate a portrait.
    ///
    /// All traits are resolved and the draw plan is validated before
    /// anything is composited; on error no canvas is produced.
    pub fn generate<R: Rng + ?Sized>(&self, overrides: &Overrides, rng: &mut R) -> Result<Portrait> {
        let (selection, look) = self.resolve(overrides, rng)?;
        let ops = draw_plan(self.catalog.body(), &look)?;
        let canvas = self.compositor.compose(&ops)?;

        tracing::debug!(traits = %selection.summary(), "Generated portrait");

        Ok(Portrait { canvas, selection })
    }

    /// Resolve every trait without compositing.
    ///
    /// The order of random draws is fixed so that a seed always resolves to
    /// the same look.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        overrides: &Overrides,
        rng: &mut R,
    ) -> Result<(Selection, Look<'a>)> {
        let mut selection = Selection::default();

        let skin = self.pick_colour(ColourRole::Skin, overrides, rng, &mut selection)?;
        let hair_colour = self.pick_colour(ColourRole::Hair, overrides, rng, &mut selection)?;
        let beard_base = match self.config.stages.beard_colour {
            BeardColour::Palette => self.pick_colour(ColourRole::Beard, overrides, rng, &mut selection)?,
            BeardColour::Hair => hair_colour,
        };
        let shirt_colour = self.pick_colour(ColourRole::Shirt, overrides, rng, &mut selection)?;

        let eyes = self.pick_variant(TraitKind::Eyes, overrides, rng, &mut selection)?;
        let mouth = self.pick_variant(TraitKind::Mouth, overrides, rng, &mut selection)?;
        let trousers = self.pick_variant(TraitKind::Trousers, overrides, rng, &mut selection)?;
        let shirt = self.pick_variant(TraitKind::Shirt, overrides, rng, &mut selection)?;

        let mut optional: BTreeMap<TraitKind, &'a Variant> = BTreeMap::new();
        for kind in TraitKind::OPTIONAL {
            if self.pick_presence(kind, overrides, rng, &mut selection)? {
                optional.insert(kind, self.pick_variant(kind, overrides, rng, &mut selection)?);
            }
        }

        let trousers_shade = overrides
            .trousers_shade
            .unwrap_or_else(|| rng.gen_range(TROUSERS_SHADE));
        let trousers_colour = shirt_colour.shifted(trousers_shade, TROUSERS_CLAMP.0, TROUSERS_CLAMP.1);
        selection.trousers_shade = trousers_shade;
        selection.trousers_colour = trousers_colour;

        let beard = match optional.get(&TraitKind::Beard) {
            Some(style) => {
                let shade = overrides.beard_shade.unwrap_or_else(|| rng.gen_range(BEARD_SHADE));
                let colour = beard_base.shifted(shade, BEARD_CLAMP.0, BEARD_CLAMP.1);
                selection.beard_shade = Some(shade);
                selection.beard_colour = Some(colour);
                Some((*style, colour))
            }
            None => None,
        };

        let hands = match optional.get(&TraitKind::Item).copied() {
            Some(item) => Hands::HoldingItem(item),
            None => Hands::Empty,
        };

        let look = Look {
            skin,
            hair_colour,
            shirt_colour,
            trousers_colour,
            eyes,
            mouth,
            shirt,
            trousers,
            hair: optional.get(&TraitKind::Hair).copied(),
            glasses: optional.get(&TraitKind::Glasses).copied(),
            beard,
            hat: optional.get(&TraitKind::Hat).copied(),
            jewellery: optional.get(&TraitKind::Jewellery).copied(),
            hands,
            pin: optional.get(&TraitKind::Pin).copied(),
        };

        Ok((selection, look))
    }

    fn pick_colour<R: Rng + ?Sized>(
        &self,
        role: ColourRole,
        overrides: &Overrides,
        rng: &mut R,
        selection: &mut Selection,
    ) -> Result<Colour> {
        let index = overrides.colours.get(&role).copied();
        let chosen = self.selector.select(self.palette.role(role), index, rng)?.copied();

        tracing::trace!(role = %role, index = chosen.index, colour = %chosen.item, "Picked colour");
        selection.colours.insert(
            role,
            ColourChoice {
                index: chosen.index,
                colour: chosen.item,
            },
        );
        Ok(chosen.item)
    }

    fn pick_variant<R: Rng + ?Sized>(
        &self,
        kind: TraitKind,
        overrides: &Overrides,
        rng: &mut R,
        selection: &mut Selection,
    ) -> Result<&'a Variant> {
        let index = overrides.variants.get(&kind).copied();
        let chosen = self.selector.select(self.catalog.variants(kind), index, rng)?;

        tracing::trace!(kind = %kind, index = chosen.index, variant = %chosen.item.name, "Picked variant");
        selection.variants.insert(
            kind,
            VariantChoice {
                index: chosen.index,
                name: chosen.item.name.clone(),
            },
        );
        Ok(chosen.item)
    }

    fn pick_presence<R: Rng + ?Sized>(
        &self,
        kind: TraitKind,
        overrides: &Overrides,
        rng: &mut R,
        selection: &mut Selection,
    ) -> Result<bool> {
        let forced = overrides.presence.get(&kind).copied();

        let present = match self.config.presence.flag(kind) {
            Some(_) if !self.config.stages.enabled(kind) => {
                if forced == Some(true) {
                    tracing::warn!(kind = %kind, "Stage is disabled, ignoring presence override");
                }
                false
            }
            // Nothing to draw; only a forced presence reaches the empty catalog
            Some(_) if self.catalog.count(kind) == 0 && forced != Some(true) => false,
            Some(flag) => *self.selector.select(flag, forced.map(usize::from), rng)?.item,
            None => false,
        };

        selection.presence.insert(kind, present);
        Ok(present)
    }
}
