//! Failure categories surfaced by the converter.
//!
//! Everything except [`ConvertError::LoggingFailure`] ends a request. Logging
//! failures are reported through `tracing` and dropped by the converter.

use std::path::PathBuf;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file does not exist.
    #[error("PDF file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Input exists but is not a regular `.pdf` file.
    #[error("File must be a PDF: {} ({reason})", path.display())]
    InvalidInput { path: PathBuf, reason: String },

    /// The engine raised or reported a non-success status.
    #[error("Failed to convert PDF to Markdown: {}: {source}", path.display())]
    ConversionFailure {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Markdown or JSON output could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Processing log could not be produced.
    #[error("Failed to write processing log {}: {source}", path.display())]
    LoggingFailure {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl ConvertError {
    pub fn conversion(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::ConversionFailure {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Stderr prefix used by the CLI for this category.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::InvalidInput { .. } => "Error",
            Self::ConversionFailure { .. } => "Conversion failed",
            Self::WriteFailure { .. } => "File write error",
            Self::LoggingFailure { .. } => "Warning",
        }
    }
}
