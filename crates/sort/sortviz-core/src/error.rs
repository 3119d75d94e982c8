//! Error types for sortviz.
//!
//! A sort run itself cannot fail; errors only come from the edges: parsing a
//! run configuration, resolving an algorithm by name, or a rendering sink.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SortError {
    /// No algorithm registered under this name
    #[error("Unknown sorting algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// Run configuration could not be parsed or is inconsistent
    #[error("Invalid run configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Rendering sink failed to write a snapshot or report
    #[error("Display error: {reason}")]
    Display { reason: String },
}

impl SortError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownAlgorithm { .. } | Self::InvalidConfig { .. } => "config",
            Self::Display { .. } => "display",
        }
    }
}

impl From<serde_json::Error> for SortError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for SortError {
    fn from(err: std::io::Error) -> Self {
        Self::Display {
            reason: err.to_string(),
        }
    }
}
