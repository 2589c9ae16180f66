//! Error types for mealdex
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for mealdex
#[derive(Error, Debug)]
pub enum AppError {
    /// The durable key-value backend could not be read or written.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A persisted favorites blob exists but is not a well-formed
    /// serialization. Never propagates past the favorites store.
    #[error("Corrupt favorites data: {0}")]
    CorruptData(String),

    /// The remote recipe source failed. Callers degrade to an empty
    /// state; no retry happens at this layer.
    #[error("{}", friendly_source_error(.0))]
    SourceUnavailable(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for mealdex
pub type Result<T> = std::result::Result<T, AppError>;

fn friendly_source_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!(
                "Could not connect to {}",
                url.host_str().unwrap_or("server")
            );
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Recipe source error: {e}")
}
