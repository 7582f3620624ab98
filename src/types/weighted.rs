//! Weighted option lists.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{MugshotError, Result};

/// An ordered list of options with relative selection weights.
///
/// Weights are relative: `[1.0, 3.0]` and `[0.25, 0.75]` describe the same
/// distribution. The list may be empty (an asset directory with no variants);
/// sampling an empty catalog yields nothing and callers turn that into
/// [`MugshotError::EmptyCatalog`].
#[derive(Debug, Clone)]
pub struct WeightedCatalog<T> {
    category: String,
    items: Vec<T>,
    weights: Vec<f64>,
    dist: Option<WeightedIndex<f64>>,
}

impl<T> WeightedCatalog<T> {
    /// Create a catalog with explicit weights.
    pub fn new(category: impl Into<String>, items: Vec<T>, weights: Vec<f64>) -> Result<Self> {
        let category = category.into();

        if items.len() != weights.len() {
            return Err(MugshotError::WeightMismatch {
                category,
                items: items.len(),
                weights: weights.len(),
            });
        }

        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(MugshotError::InvalidWeights {
                category,
                message: format!("{} is not a valid weight", bad),
            });
        }

        let dist = if items.is_empty() {
            None
        } else {
            let dist = WeightedIndex::new(&weights).map_err(|e| MugshotError::InvalidWeights {
                category: category.clone(),
                message: e.to_string(),
            })?;
            Some(dist)
        };

        Ok(Self {
            category,
            items,
            weights,
            dist,
        })
    }

    /// Create a catalog where every option is equally likely.
    pub fn uniform(category: impl Into<String>, items: Vec<T>) -> Self {
        let weights = vec![1.0; items.len()];
        Self::from_builtin(category, items, weights)
    }

    /// Build from a table whose weights are known to be valid.
    pub(crate) fn from_builtin(category: impl Into<String>, items: Vec<T>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(items.len(), weights.len());
        let dist = WeightedIndex::new(&weights).ok();
        Self {
            category: category.into(),
            items,
            weights,
            dist,
        }
    }

    /// Name of the category, used in errors and logs.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the number of options.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no options.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an option by index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// All options in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The relative weights, parallel to [`items`](Self::items).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Normalised probability of the option at `index`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        let total: f64 = self.weights.iter().sum();
        self.weights.get(index).map(|w| w / total)
    }

    /// Iterate over `(option, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.items.iter().zip(self.weights.iter().copied())
    }

    /// Draw an index according to the weights. `None` when empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.dist.as_ref().map(|d| d.sample(rng))
    }
}

/// A presence flag: `false` with weight `1 - p`, `true` with weight `p`.
pub(crate) fn presence(category: impl Into<String>, probability: f64) -> Result<WeightedCatalog<bool>> {
    let category = category.into();
    if !(0.0..=1.0).contains(&probability) {
        return Err(MugshotError::InvalidWeights {
            category,
            message: format!("presence probability {} is outside 0..=1", probability),
        });
    }
    WeightedCatalog::new(category, vec![false, true], vec![1.0 - probability, probability])
}
