//! Error types for the strata library.

use std::io;
use thiserror::Error;

/// Result type alias for strata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the inference core.
///
/// The inference pipeline itself never fails: degenerate inputs map to
/// well-defined fallback values (placeholder title, empty outline).
/// These variants cover the boundaries: fragment ingestion, output
/// serialization, and batch I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading fragment dumps or writing outlines.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A fragment source failed to produce its fragments.
    #[error("Fragment source error: {0}")]
    Source(String),

    /// A fragment record was malformed (bad JSON, missing fields).
    #[error("Invalid fragment record: {0}")]
    InvalidFragment(String),

    /// Error serializing an outline to JSON.
    #[error("Rendering error: {0}")]
    Render(String),

    /// A sink rejected the outline record.
    #[error("Output sink error: {0}")]
    Sink(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
