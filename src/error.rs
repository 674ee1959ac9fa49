//! Error handling module
//!
//! Every condition in this module aborts the measurement run. The only
//! non-fatal condition (suspiciously short encoder output) is a log event
//! and never becomes an [`Error`].

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::Format;
use crate::config::ConfigError;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// A fixture file is missing or unreadable
    #[error("Failed to read fixture {}: {source}", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Input is malformed or does not match the data model
    #[error("{format} decode failed: {message}")]
    Decode { format: Format, message: String },
    /// The encoder rejected a decoded tree
    #[error("{format} encode failed: {message}")]
    Encode { format: Format, message: String },
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Writing progress or report output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a decode error from any codec error
    pub fn decode(format: Format, err: impl fmt::Display) -> Self {
        Error::Decode {
            format,
            message: err.to_string(),
        }
    }

    /// Create an encode error from any codec error
    pub fn encode(format: Format, err: impl fmt::Display) -> Self {
        Error::Encode {
            format,
            message: err.to_string(),
        }
    }

    /// Create a fixture read error for the given path
    pub fn fixture_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FixtureRead {
            path: path.into(),
            source,
        }
    }
}
