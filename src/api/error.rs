// ABOUTME: Error types for the zPodFactory inventory API client
// ABOUTME: Maps transport and HTTP status failures to typed errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Cannot connect to zpodapi at {0}")]
    ConnectError(String),

    #[error("Authentication failed. Check your API token")]
    AuthenticationFailed,

    #[error("zPod '{0}' not found")]
    ZpodNotFound(String),

    #[error("API returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
