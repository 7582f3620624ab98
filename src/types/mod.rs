mod catalog;
mod colour;
mod layer;
mod palette;
mod traits;
mod variant;
mod weighted;

pub use catalog::{Catalog, CatalogBuilder};
pub use colour::Colour;
pub use layer::Layer;
pub use palette::Palette;
pub use traits::{ColourRole, TraitKind};
pub use variant::{BodyPart, BodyParts, Variant};
pub use weighted::WeightedCatalog;

pub(crate) use weighted::presence;
