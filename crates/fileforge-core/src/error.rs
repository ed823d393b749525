//! Error Types
//!
//! [`ConversionError`] is the closed set of reasons a conversion attempt can
//! fail. [`DataError`] covers the embedded content tables.

use thiserror::Error;

/// Why a conversion attempt did not produce a download
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Neither a file nor a URL was supplied.
    #[error("Please provide a file or URL to convert")]
    MissingInput,

    /// The target format label was empty.
    #[error("Please select an output format")]
    MissingTargetFormat,

    /// The URL is not an http(s) link to a file with the expected extension.
    #[error("'{url}' is not a valid link to a {expected} file")]
    InvalidUrl { url: String, expected: &'static str },

    /// No API credential was configured at build time.
    #[error("API key not set. Add ILOVEPDF_API_KEY to the build environment.")]
    MissingCredential,

    /// The uploaded file exceeds what the visitor's tier allows.
    #[error("'{name}' is {size} bytes; your plan allows files up to {limit} bytes")]
    FileTooLarge { name: String, size: u64, limit: u64 },

    #[error("{0}")]
    Other(String),
}

impl ConversionError {
    /// Credential problems get their own "service unavailable" banner.
    pub fn is_credential_error(&self) -> bool {
        matches!(self, ConversionError::MissingCredential)
    }
}

/// An embedded content table could not be decoded
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to parse {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
