//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while building a transaction record from raw explorer data
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} must be a string representing an integer, or an empty string. Got: '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    #[error("Malformed transaction object: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors that can occur while talking to an external provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No daily data to plot")]
    EmptyData,

    #[error("Failed to write chart: {0}")]
    Output(#[from] OutputError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
