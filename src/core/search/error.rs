//! Search Error Types
//!
//! Error handling for the book search module.

use thiserror::Error;

/// Search operation errors
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search backend returned HTTP {0}")]
    BackendStatus(reqwest::StatusCode),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
