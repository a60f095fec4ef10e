//! Error types for catalog lookups

use core::fmt;

/// Errors that can occur during a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The lookup could not produce candidates
    NetworkFailure(FailureReason),

    /// The lookup succeeded with zero candidates
    EmptyResult,

    /// The query was empty or whitespace only
    InvalidInput,
}

/// Why a lookup failed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// Request rejected before a response arrived
    Transport(String),

    /// Response arrived with a non-success status
    Status(u16),

    /// Response body could not be decoded
    Malformed(String),

    /// Request URL could not be built
    InvalidUrl(String),
}

impl CatalogError {
    /// Check if the widget recovers by showing the fallback list
    #[inline]
    pub fn uses_fallback(&self) -> bool {
        !matches!(self, CatalogError::InvalidInput)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NetworkFailure(reason) => write!(f, "Catalog unavailable: {}", reason),
            CatalogError::EmptyResult => write!(f, "No catalog results"),
            CatalogError::InvalidInput => write!(f, "Empty query"),
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Transport(msg) => write!(f, "request failed: {}", msg),
            FailureReason::Status(status) => write!(f, "unexpected status {}", status),
            FailureReason::Malformed(msg) => write!(f, "malformed response: {}", msg),
            FailureReason::InvalidUrl(msg) => write!(f, "invalid url: {}", msg),
        }
    }
}

impl From<FailureReason> for CatalogError {
    fn from(reason: FailureReason) -> Self {
        CatalogError::NetworkFailure(reason)
    }
}

impl From<url::ParseError> for FailureReason {
    fn from(e: url::ParseError) -> Self {
        FailureReason::InvalidUrl(e.to_string())
    }
}

impl From<serde_json::Error> for FailureReason {
    fn from(e: serde_json::Error) -> Self {
        FailureReason::Malformed(e.to_string())
    }
}
