//! Error types for page-extract.
//!
//! Extraction itself never fails; these errors only come out of URL
//! normalization and configuration loading.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for normalization and configuration
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not a syntactically valid absolute URL
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A configured CSS selector could not be compiled
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector {
        /// The selector text as configured
        selector: String,
        /// Parser message
        reason: String,
    },

    /// Reading a configuration or input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON was malformed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
