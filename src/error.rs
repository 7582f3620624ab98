use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mugshot operations
#[derive(Error, Diagnostic, Debug)]
pub enum MugshotError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mugshot::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mugshot::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(mugshot::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(mugshot::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No variants available for '{category}'")]
    #[diagnostic(
        code(mugshot::empty_catalog),
        help("Add at least one variant directory for this category")
    )]
    EmptyCatalog { category: String },

    #[error("Layer '{layer}' is {actual_width}x{actual_height}, canvas is {width}x{height}")]
    #[diagnostic(
        code(mugshot::dimension_mismatch),
        help("Every layer must be exported at the canvas size, aligned to the origin")
    )]
    DimensionMismatch {
        layer: String,
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Override index {index} is out of range for '{category}' ({len} options)")]
    #[diagnostic(code(mugshot::invalid_override))]
    InvalidOverrideIndex {
        category: String,
        index: usize,
        len: usize,
    },

    #[error("Variant '{variant}' of '{category}' has no {slot} layer")]
    #[diagnostic(code(mugshot::missing_layer))]
    MissingLayer {
        category: String,
        variant: String,
        slot: &'static str,
    },

    #[error("Body part '{part}' is missing")]
    #[diagnostic(code(mugshot::missing_body_part))]
    MissingBodyPart {
        part: String,
        #[help]
        help: Option<String>,
    },

    #[error("'{category}' has {items} options but {weights} weights")]
    #[diagnostic(code(mugshot::weights))]
    WeightMismatch {
        category: String,
        items: usize,
        weights: usize,
    },

    #[error("Invalid weights for '{category}': {message}")]
    #[diagnostic(
        code(mugshot::weights),
        help("Weights must be finite, non-negative and not all zero")
    )]
    InvalidWeights { category: String, message: String },

    #[error("{message}")]
    #[diagnostic(code(mugshot::command))]
    Command {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MugshotError>;
