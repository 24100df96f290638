//! Error Types

use thiserror::Error;

/// Failure of a request against one of the planner endpoints
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Http(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    /// The server answered but reported a non-success status
    #[error("{0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid planner config: {0}")]
    Invalid(String),
}
