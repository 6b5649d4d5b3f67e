//! Benchmark error types

use shared::SharedError;
use thiserror::Error;

/// Result type for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Benchmark error types
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API call {endpoint} failed with status {status}: {message}")]
    Api { endpoint: String, status: u16, message: String },

    #[error("Could not resolve {query} on the federated instance")]
    ResolveFailure { query: String },

    #[error("No session could be established for '{username}'")]
    NoSession { username: String },

    #[error("Expectation failed: {message}")]
    Assertion { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] SharedError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl BenchError {
    pub fn assertion(message: impl Into<String>) -> Self {
        BenchError::Assertion { message: message.into() }
    }
}
