//! Error types for the TLE harness.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the TLE harness.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {source}")]
    Config {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("invalid sampling parameters: {0}")]
    InvalidSampling(String),

    // Input errors (20-29)
    #[error("failed to open input file {}: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input at line {line_number}: {source}")]
    InputRead {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },

    // Validation errors (30-39)
    #[error("invalid element line: {0}")]
    InvalidLine(String),

    #[error("catalog number mismatch: line 1 has {line1}, line 2 has {line2}")]
    CatalogMismatch { line1: u32, line2: u32 },

    // Propagation errors (40-49)
    #[error("propagator initialisation failed for {catalog_number}: {message}")]
    PropagatorInit { catalog_number: u32, message: String },

    #[error("propagation failed at {offset} min: {message}")]
    Propagation { offset: f64, message: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used to tag diagnostics so log consumers can filter by class.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config { .. } => 10,
            Error::InvalidSampling(_) => 11,
            Error::InputOpen { .. } => 20,
            Error::InputRead { .. } => 21,
            Error::InvalidLine(_) => 30,
            Error::CatalogMismatch { .. } => 31,
            Error::PropagatorInit { .. } => 40,
            Error::Propagation { .. } => 41,
            Error::Io(_) => 60,
        }
    }

    /// Whether the run must stop when this error is raised.
    ///
    /// Validation and propagation failures are local to one line or one
    /// record; everything touching the input or output streams is not.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InputOpen { .. } | Error::InputRead { .. } | Error::Io(_)
        )
    }
}
