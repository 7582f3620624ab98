//! Trait resolution and portrait generation.

mod config;
mod generator;
mod overrides;
mod plan;
mod selection;
mod selector;

pub use config::{BeardColour, GeneratorConfig, PresenceWeights, Stages};
pub use generator::{Generator, Portrait};
pub use overrides::Overrides;
pub use plan::{draw_plan, Hands, Look};
pub use selection::{ColourChoice, Selection, VariantChoice};
pub use selector::{Chosen, OverridePolicy, Selector};
