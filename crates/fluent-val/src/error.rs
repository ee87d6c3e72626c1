//! Error types for node operations
//!
//! All fallible operations return [`FluentResult<T>`], a type alias for
//! `Result<T, FluentError>`. Errors are raised at the point of violation and
//! never retried.

use miette::Diagnostic;
use thiserror::Error;

/// Error type for node construction, lookup, list access and reading.
///
/// ```rust
/// use fluent_val::FluentError;
///
/// let err = FluentError::MissingAttribute("port".to_string());
/// assert_eq!(err.to_string(), "no such item(port)");
/// ```
#[derive(Error, Diagnostic, Debug, PartialEq, Clone)]
pub enum FluentError {
    /// Construction was handed something other than a mapping or a sequence.
    #[error("value is not iterable: found {found}")]
    #[diagnostic(
        code(fluent::not_iterable),
        help("only mappings and sequences can be wrapped into a node")
    )]
    NotIterable {
        /// Kind of the rejected value
        found: String,
    },

    /// Attribute lookup missed on a node built with `raise_on_missing`.
    #[error("no such item({0})")]
    #[diagnostic(code(fluent::missing_attribute))]
    MissingAttribute(String),

    /// Keyed lookup named an attribute that does not exist.
    #[error("key ({0}) does not exist")]
    #[diagnostic(code(fluent::missing_key))]
    MissingKey(String),

    /// List access with a position that is not an integer.
    #[error("position must be an integer, found {found}")]
    #[diagnostic(code(fluent::invalid_index_type))]
    InvalidIndexType {
        /// Kind of the rejected position
        found: String,
    },

    #[error("negative indices are not allowed: {0}")]
    #[diagnostic(code(fluent::negative_index))]
    NegativeIndex(i64),

    #[error("index {index} out of range for {len} elements")]
    #[diagnostic(code(fluent::index_out_of_range))]
    IndexOutOfRange { index: usize, len: usize },

    /// A reader was advanced past its last value.
    #[error("end of sequence")]
    #[diagnostic(code(fluent::end_of_sequence))]
    EndOfSequence,
}

/// Result type for node operations
pub type FluentResult<T> = Result<T, FluentError>;
