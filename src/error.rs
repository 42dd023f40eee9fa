//! Error kinds surfaced by configuration and the completion provider.

use reqwest::StatusCode;
use thiserror::Error;

/// Startup configuration problems. Any of these is fatal before the session starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not configured (set one of: {})", vars.join(", "))]
    MissingApiKey { vars: Vec<String> },

    #[error("invalid provider base URL `{url}`")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid request timeout `{value}`: expected a positive number of seconds")]
    InvalidTimeout { value: String },

    #[error("build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Failures of a single completion call.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed provider response: {reason}")]
    Malformed { reason: String },
}

impl ProviderError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ProviderError::Malformed {
            reason: reason.into(),
        }
    }
}
