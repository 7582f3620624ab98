//! The trait catalog: every variant of every category plus the body.

use std::collections::BTreeMap;

use crate::error::Result;

use super::{BodyParts, Layer, TraitKind, Variant, WeightedCatalog};

/// Read-only collection of all portrait fragments.
///
/// Shared by reference between generation runs (and threads). Each category
/// is a [`WeightedCatalog`] addressed by [`TraitKind`].
#[derive(Debug, Clone)]
pub struct Catalog {
    body: BodyParts,
    /// One table per kind, indexed by `slot`.
    traits: Vec<WeightedCatalog<Variant>>,
}

impl Catalog {
    /// Start building a catalog around a set of body parts.
    pub fn builder(body: BodyParts) -> CatalogBuilder {
        CatalogBuilder::new(body)
    }

    /// Canvas dimensions, taken from the body layer.
    pub fn canvas_size(&self) -> (u32, u32) {
        self.body.body.size()
    }

    /// The fixed body layers.
    pub fn body(&self) -> &BodyParts {
        &self.body
    }

    /// Variants of a category.
    pub fn variants(&self, kind: TraitKind) -> &WeightedCatalog<Variant> {
        &self.traits[slot(kind)]
    }

    /// Number of variants in a category.
    pub fn count(&self, kind: TraitKind) -> usize {
        self.variants(kind).len()
    }

    /// Iterate over every layer with a descriptive label (`eyes/wide/fg.png`).
    pub fn layers(&self) -> impl Iterator<Item = (String, &Layer)> {
        let body = self
            .body
            .iter()
            .map(|(part, layer)| (format!("body/{}", part), layer));

        let traits = TraitKind::ALL.into_iter().flat_map(move |kind| {
            self.variants(kind).items().iter().flat_map(move |variant| {
                variant
                    .layers()
                    .map(move |layer| (format!("{}/{}/{}", kind, variant.name, layer.name), layer))
            })
        });

        body.chain(traits)
    }
}

/// Position of a kind in the catalog table (its index in `TraitKind::ALL`).
fn slot(kind: TraitKind) -> usize {
    match kind {
        TraitKind::Eyes => 0,
        TraitKind::Mouth => 1,
        TraitKind::Trousers => 2,
        TraitKind::Shirt => 3,
        TraitKind::Hair => 4,
        TraitKind::Glasses => 5,
        TraitKind::Beard => 6,
        TraitKind::Hat => 7,
        TraitKind::Jewellery => 8,
        TraitKind::Item => 9,
        TraitKind::Pin => 10,
    }
}

/// Builder for assembling a catalog from loaded or synthesised layers.
#[derive(Debug)]
pub struct CatalogBuilder {
    body: BodyParts,
    variants: BTreeMap<TraitKind, Vec<Variant>>,
    weights: BTreeMap<TraitKind, Vec<f64>>,
}

impl CatalogBuilder {
    /// Create a builder with no variants.
    pub fn new(body: BodyParts) -> Self {
        Self {
            body,
            variants: BTreeMap::new(),
            weights: BTreeMap::new(),
        }
    }

    /// Add a variant to its category.
    pub fn add_variant(&mut self, variant: Variant) -> &mut Self {
        self.variants.entry(variant.kind).or_default().push(variant);
        self
    }

    /// Add several variants.
    pub fn add_variants(&mut self, variants: impl IntoIterator<Item = Variant>) -> &mut Self {
        for variant in variants {
            self.add_variant(variant);
        }
        self
    }

    /// Set explicit weights for a category (uniform otherwise).
    pub fn weights(&mut self, kind: TraitKind, weights: Vec<f64>) -> &mut Self {
        self.weights.insert(kind, weights);
        self
    }

    /// Build the catalog.
    pub fn build(mut self) -> Result<Catalog> {
        let mut traits = Vec::with_capacity(TraitKind::ALL.len());

        for kind in TraitKind::ALL {
            let variants = self.variants.remove(&kind).unwrap_or_default();
            let table = match self.weights.remove(&kind) {
                Some(weights) => WeightedCatalog::new(kind.name(), variants, weights)?,
                None => WeightedCatalog::uniform(kind.name(), variants),
            };
            traits.push(table);
        }

        Ok(Catalog {
            body: self.body,
            traits,
        })
    }
}
