//! Error types for flightbook.
//!
//! Most failures in this crate are handled where they happen (a failed load
//! falls back to an empty flight list, a failed record entry is skipped).
//! The variants here cover the few failures that do travel: persistence
//! write errors and the orchestrator's own setup problems.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightbook operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The user's home directory could not be determined.
    #[error("could not determine the home directory")]
    HomeDirectory,

    /// Writing the data file failed.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path that could not be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for flightbook operations.
pub type Result<T> = std::result::Result<T, Error>;
