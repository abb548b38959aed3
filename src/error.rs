//! Error types for rosterdb
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for rosterdb operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// The data file could not be opened (for reading or writing)
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Collection Errors
    // -------------------------------------------------------------------------
    /// Growing the backing storage failed; the collection is unchanged
    #[error("Allocation failure: could not grow collection to {requested} records")]
    AllocationFailure { requested: usize },

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RosterError::Open {
            path: path.into(),
            source,
        }
    }
}
