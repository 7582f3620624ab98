//! Weighted or index-forced selection over a catalog.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MugshotError, Result};
use crate::types::WeightedCatalog;

/// What to do with an override index that is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverridePolicy {
    /// Log a warning and draw at random instead.
    #[default]
    Fallback,
    /// Fail with [`MugshotError::InvalidOverrideIndex`].
    Strict,
}

/// A selected option and the index it came from.
///
/// The index is what gets recorded: it reproduces the choice against the
/// same catalog without storing any pixel data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chosen<T> {
    pub index: usize,
    pub item: T,
}

impl<T: Copy> Chosen<&T> {
    /// Copy the selected item out of the catalog.
    pub fn copied(self) -> Chosen<T> {
        Chosen {
            index: self.index,
            item: *self.item,
        }
    }
}

/// Picks options from weighted catalogs.
///
/// Holds no mutable state; randomness comes from the RNG passed to each
/// call, so one selector can serve concurrent runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selector {
    policy: OverridePolicy,
}

impl Selector {
    /// Create a selector with an override policy.
    pub fn new(policy: OverridePolicy) -> Self {
        Self { policy }
    }

    /// The active override policy.
    pub fn policy(&self) -> OverridePolicy {
        self.policy
    }

    /// Select an option.
    ///
    /// A valid `index` forces that option. Without one, an option is drawn
    /// according to the catalog's weights. An out-of-range index is handled
    /// according to the [`OverridePolicy`].
    pub fn select<'c, T, R: Rng + ?Sized>(
        &self,
        catalog: &'c WeightedCatalog<T>,
        index: Option<usize>,
        rng: &mut R,
    ) -> Result<Chosen<&'c T>> {
        if catalog.is_empty() {
            return Err(MugshotError::EmptyCatalog {
                category: catalog.category().to_string(),
            });
        }

        if let Some(index) = index {
            if let Some(item) = catalog.get(index) {
                return Ok(Chosen { index, item });
            }

            match self.policy {
                OverridePolicy::Strict => {
                    return Err(MugshotError::InvalidOverrideIndex {
                        category: catalog.category().to_string(),
                        index,
                        len: catalog.len(),
                    });
                }
                OverridePolicy::Fallback => {
                    tracing::warn!(
                        category = catalog.category(),
                        index,
                        len = catalog.len(),
                        "Override index out of range, selecting at random"
                    );
                }
            }
        }

        let drawn = catalog.sample(rng).and_then(|i| catalog.get(i).map(|item| (i, item)));
        let Some((index, item)) = drawn else {
            return Err(MugshotError::EmptyCatalog {
                category: catalog.category().to_string(),
            });
        };

        Ok(Chosen { index, item })
    }
}
