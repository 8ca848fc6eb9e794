//! Error types for Lumiq.
//!
//! This module provides a unified error type for all Lumiq operations,
//! with specific error variants for different failure modes.

use std::io;

use thiserror::Error;

/// A specialized `Result` type for Lumiq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Lumiq.
#[derive(Error, Debug)]
pub enum Error {
    /// Theme id is not part of the catalog
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    /// Storage backend is disabled or cannot be reached
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Write would exceed the storage quota
    #[error("storage quota exceeded: need {needed} bytes, limit is {limit} bytes")]
    QuotaExceeded {
        /// Bytes the store would hold after the write
        needed: usize,
        /// Configured byte limit
        limit: usize,
    },

    /// Configuration file error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidConfig {
        /// Configuration key
        key: String,
        /// Reason for invalidity
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Returns whether this error came from the preference storage layer.
    ///
    /// Storage failures are recovered locally: the in-memory preference stays
    /// authoritative for the session.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable(_)
                | Self::QuotaExceeded { .. }
                | Self::Io(_)
                | Self::Serialization(_)
        )
    }

    /// Returns a helpful suggestion for resolving the error, if applicable.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownTheme(_) => Some("Run 'lumiq list' to see the available themes."),
            Self::StorageUnavailable(_) | Self::Io(_) => Some(
                "Check that the preference file location is writable,\n\
                 or point Lumiq elsewhere with --store <path>.",
            ),
            Self::Serialization(_) => Some(
                "The preference file looks corrupt. Remove the file listed by\n\
                 'lumiq config path' to start over.",
            ),
            Self::ConfigError(_) | Self::InvalidConfig { .. } => Some(
                "Reset the configuration with:\n\
                   lumiq config reset",
            ),
            Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
