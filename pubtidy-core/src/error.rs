//! Core error types

use thiserror::Error;

/// Errors produced by table access, field-map construction and the
/// cleaning transforms
#[derive(Error, Debug)]
pub enum CoreError {
    /// Column lookup failed
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A transform expected a text-typed column
    #[error("column '{0}' holds non-text cells")]
    NotText(String),

    /// Column insertion with a length that does not match the table
    #[error("column '{name}' has {actual} cells, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column
        name: String,
        /// Number of cells supplied
        actual: usize,
        /// Current row count of the table
        expected: usize,
    },

    /// The field map contains the same tag twice
    #[error("duplicate field tag: {0}")]
    DuplicateTag(String),

    /// A field tag wider than the tag window can never match a line
    #[error("field tag '{0}' exceeds the tag window")]
    TagTooLong(String),

    /// A field entry with an empty tag
    #[error("empty tag for field key '{0}'")]
    EmptyTag(String),

    /// A replacement pattern failed to compile
    #[error("invalid replacement pattern: {0}")]
    Pattern(String),
}

impl From<regex::Error> for CoreError {
    fn from(err: regex::Error) -> Self {
        CoreError::Pattern(err.to_string())
    }
}

impl From<fancy_regex::Error> for CoreError {
    fn from(err: fancy_regex::Error) -> Self {
        CoreError::Pattern(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
