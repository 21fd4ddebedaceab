//! Error types for the preview pipeline.

use std::path::PathBuf;

/// Result type alias for preview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a stylesheet into a preview document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stylesheet could not be read from disk.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stylesheet is not valid CSS.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// A selector segment whose class or id part cannot become an attribute.
    #[error("Invalid selector segment '{segment}': {message}")]
    InvalidSegment { segment: String, message: String },

    /// The preview document could not be written out.
    #[error("Failed to write preview: {0}")]
    Write(#[from] std::io::Error),
}

impl Error {
    /// Create an I/O error for a stylesheet path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a segment error.
    pub fn invalid_segment(segment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSegment {
            segment: segment.into(),
            message: message.into(),
        }
    }
}
