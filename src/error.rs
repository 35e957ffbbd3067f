//! Error types for the adapter
//!
//! Transport failures are kept separate from extraction failures: discovery
//! and probing treat every `TransportError` as a failed attempt, while the
//! caller-invoked extraction paths surface `SourceError` directly.

use thiserror::Error;

/// Result type alias for adapter operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Failure to obtain a response at all
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or timeout failure
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The response body could not be read to the end
    #[error("reading body of {url} failed: {message}")]
    Body { url: String, message: String },
}

/// Error types for adapter operations
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-success HTTP status on a request whose content is required
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured CSS selector does not parse
    #[error("invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A required element is absent from a caller-supplied document
    #[error("missing {field} (selector '{selector}')")]
    MissingElement {
        field: &'static str,
        selector: String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
