// ABOUTME: Inventory API module for zpodgen
// ABOUTME: Provides the HTTP client and error types for the zPodFactory service

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, Result};
