//! mugshot - Layered character portrait generator
//!
//! A library for composing portraits from layered PNG trait fragments:
//! weighted trait selection, marker-based recolouring, and back-to-front
//! compositing, driven by a seedable RNG.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_with_assets, load_catalog, DiscoveryResult, Manifest, ScanResult};
pub use error::{MugshotError, Result};
pub use generate::{
    draw_plan, GeneratorConfig, Generator, OverridePolicy, Overrides, Portrait, Selection, Selector, Stages,
};
pub use render::{recolour, write_png, BlitMode, Compositor, DrawOp, Marker, Tint};
pub use types::{
    BodyPart, BodyParts, Catalog, CatalogBuilder, Colour, ColourRole, Layer, Palette, TraitKind, Variant,
    WeightedCatalog,
};
pub use validation::{validate_catalog, Diagnostic, Severity, ValidationResult};
