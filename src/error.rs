//! Error types for depgate

use thiserror::Error;

/// Errors that can occur while checking pull request dependencies
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API request failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// A reference pattern could not be compiled
    #[error("invalid reference pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
