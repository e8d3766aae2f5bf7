//! Error types for the conversion pipeline.
//!
//! Every failure is fatal: the run either yields a complete interaction
//! model or one of these errors, never a partial document.

use thiserror::Error;

/// Errors that can occur while converting training data.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A source document could not be opened or read, or the output could not be written.
    #[error("failed to access {path}: {message}")]
    DocumentAccess { path: String, message: String },

    /// A source document is not valid structured data, or violates the training grammar.
    #[error("malformed document at {location}: {message}")]
    DocumentFormat { location: String, message: String },

    /// A name (slot, intent) does not resolve against its declaring document.
    #[error("unresolved reference '{name}': {message}")]
    Reference { name: String, message: String },

    /// The assembled model could not be rendered.
    #[error("failed to serialize interaction model: {message}")]
    Serialization { message: String },
}

impl ConvertError {
    pub(crate) fn format(location: impl Into<String>, message: impl Into<String>) -> Self {
        ConvertError::DocumentFormat {
            location: location.into(),
            message: message.into(),
        }
    }

    pub(crate) fn reference(name: impl Into<String>, message: impl Into<String>) -> Self {
        ConvertError::Reference {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// A grammar error inside a single annotated sample.
///
/// `offset` is the byte offset in the sample where the offending span starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column {}: {message}", .offset + 1)]
pub struct AnnotationError {
    pub offset: usize,
    pub message: String,
}

impl AnnotationError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }

    /// Lift into a [`ConvertError::DocumentFormat`] located at `source:line`.
    pub fn at_line(self, source: &str, line: usize) -> ConvertError {
        ConvertError::format(format!("{}:{}", source, line), self.to_string())
    }
}
