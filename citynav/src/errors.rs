//! Errors.

use std::io;

use thiserror::Error;

/// Rejected connection input. The graph is left unchanged.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ValidationError {
    #[error("City name must not be empty")]
    EmptyCityName,

    #[error("Please enter a valid integer for distance (got '{0}')")]
    NotAnInteger(String),

    #[error("Distance must not be negative (got {0})")]
    NegativeDistance(i64),

    #[error("Distance is too large (got {0}, max 4294967295)")]
    DistanceTooLarge(i64),
}

/// Error loading the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file (`~/.citynav` by default).
    #[error("File error: {0}")]
    ConfigFileRead(#[source] io::Error),

    /// Error parsing config file - must be a valid JSON file.
    #[error("JSON parse error: {0}")]
    BadConfigFile(#[source] serde_json::Error),
}
