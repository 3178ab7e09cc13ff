//! Error type shared by the Venn engine.

use thiserror::Error;

/// Everything that can go wrong while classifying input, computing petals,
/// resolving colors, or drawing a diagram.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VennError {
    /// Only 2..=6 sets have a geometry table.
    #[error("number of sets must be between 2 and 6, got {0}")]
    InvalidCardinality(usize),

    #[error(
        "inconsistent petal and dataset labels: key '{code}' has length {len}, expected {expected}"
    )]
    LogicLength {
        code: String,
        len: usize,
        expected: usize,
    },

    #[error("key not understood: '{0}' (only '0' and '1' are allowed)")]
    LogicAlphabet(String),

    #[error("key is not legal: '{0}'")]
    IllegalLogic(String),

    /// Input did not have the shape of either raw sets or petal labels.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("dataset names must be given as an explicit ordered list")]
    MissingNames,

    #[error("duplicate set name: '{0}'")]
    DuplicateName(String),

    #[error("size mismatch for {what}: got {got}, expected {expected}")]
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("n_colors must be an integer between 2 and 6, got {0}")]
    InvalidColorCount(usize),

    #[error("unknown color: '{0}'")]
    UnknownColor(String),

    #[error("unknown colormap: '{0}'")]
    UnknownColormap(String),

    #[error("unknown legend location: '{0}'")]
    UnknownLegendLoc(String),

    #[error("alpha must be within [0, 1], got {0}")]
    InvalidAlpha(f64),

    #[error("font size must be within 1..={max} px, got {got}")]
    InvalidFontSize { got: u32, max: u32 },

    #[error("invalid label template: {0}")]
    Template(String),

    /// A petal label has no anchor in the geometry table.
    #[error("no label position for petal '{0}'")]
    UnplacedPetal(String),

    #[error("drawing failed: {0}")]
    Draw(String),
}

pub type Result<T> = std::result::Result<T, VennError>;
