// ABOUTME: Error types for template context construction
// ABOUTME: Defines specific error types for CIDR derivation and namespace assembly

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Invalid network CIDR: {0}")]
    InvalidNetwork(String),

    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("Extra variable collides with computed key: {0}")]
    VariableCollision(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContextError>;
