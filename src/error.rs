//! Error types for the fracture-scan crate.
//!
//! The filtering pipeline itself is infallible — it always produces a
//! verdict. Errors surface only at the edges: invalid configuration and
//! search provider failures. No API keys appear in error messages.

/// Errors that can occur around the fracture-detection pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Invalid scan configuration.
    #[error("config error: {0}")]
    Config(String),

    /// An HTTP request to the search provider failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The search provider response could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The search provider reported a failure for this query.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Convenience type alias for fracture-scan results.
pub type Result<T> = std::result::Result<T, ScanError>;
