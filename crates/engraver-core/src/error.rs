//! Error types for the document model.
//!
//! Every failure of material construction, design file parsing and design
//! file storage is reported through [`DocumentError`]. The variants are kept
//! distinct so a front end can tell a corrupted file from an unsupported one.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, loading or saving a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// A material dimension is non-finite or not strictly positive.
    #[error("Invalid material {field}: {value} (must be a finite number > 0)")]
    Validation {
        /// The offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The design text is not well-formed JSON.
    #[error("Malformed design file: {0}")]
    Format(#[source] serde_json::Error),

    /// The design text is well-formed but a required field is missing or mistyped.
    #[error("Invalid design file structure: {0}")]
    Schema(String),

    /// A shape carries a `type` tag that is not a known shape.
    #[error("Unknown shape type '{tag}' at shape index {index}")]
    UnknownVariant {
        /// The unrecognized tag.
        tag: String,
        /// Position of the shape in the file's shape list.
        index: usize,
    },

    /// The document could not be encoded.
    #[error("Failed to serialize design: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading from or writing to storage failed.
    #[error("I/O error{}: {source}", location(.path))]
    Io {
        /// The file being read or written, when the sink is a file.
        path: Option<PathBuf>,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Wraps an I/O error raised by a reader or writer that is not a named file.
    pub fn stream(source: io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" on {}", path.display()),
        None => String::new(),
    }
}

/// Result type alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
