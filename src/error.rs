//! Error types for the impulse solver boundary.
//!
//! This module provides a unified error type [`ImpulseError`] for the
//! crate's I/O boundary (export writers, CLI file output). The numeric
//! core itself never fails: invalid or physically degenerate inputs
//! collapse into a canonical empty result instead of an error.

use thiserror::Error;

/// Result type alias using [`ImpulseError`].
pub type Result<T> = std::result::Result<T, ImpulseError>;

/// Unified error type for all boundary operations.
#[derive(Error, Debug)]
pub enum ImpulseError {
    // ============ Export Errors ============
    /// Error writing serialized waveform data
    #[error("Export error: {message}")]
    ExportError { message: String },

    /// Error encoding a result as JSON
    #[cfg(feature = "cli")]
    #[error("JSON encoding error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    // ============ I/O Errors ============
    /// Error writing an output file
    #[error("Failed to write output file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ImpulseError {
    /// Create an export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::ExportError {
            message: message.into(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileWriteError {
            path: path.into(),
            source,
        }
    }
}
