//! Error types for the analysis pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, tokenizing or configuring an analysis
#[derive(Debug, Error)]
pub enum Error {
    /// The character source failed to supply more data
    #[error("failed to read from character source: {0}")]
    Read(#[from] io::Error),

    /// A file source could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path of the file that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A token was requested after the token stream was exhausted
    #[error("token stream exhausted")]
    Exhausted,

    /// The requested text encoding label is not known
    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Whether this error comes from the underlying source rather than from
    /// misuse of the API
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Read(_) | Error::Open { .. })
    }
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, Error>;
