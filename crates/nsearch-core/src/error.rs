//! Error types for nsearch

use thiserror::Error;

/// Main error type for nsearch operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid operation for the current search status
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Error in search or strategy configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error in problem or solution definition
    #[error("Domain model error: {0}")]
    DomainModel(String),

    /// The search has been disposed and can no longer be used
    #[error("Search has been disposed")]
    Disposed,
}

/// Result type alias for nsearch operations
pub type Result<T> = std::result::Result<T, SearchError>;
