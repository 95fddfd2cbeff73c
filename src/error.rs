//! Error types for profile aggregation and card rendering

use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers. Degraded fan-out branches never show up here.
#[derive(Error, Debug)]
pub enum Error {
    /// The identity lookup answered with a non-success status
    #[error("User {handle} not found ({status})")]
    HandleNotFound { handle: String, status: u16 },

    /// Handle is empty or not a valid GitHub login; nothing was requested
    #[error("Invalid GitHub handle: {0:?}")]
    InvalidHandle(String),

    /// Transport or decoding failure on the identity lookup
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Unknown theme name
    #[error("Unknown theme: {0}")]
    InvalidTheme(String),
}

impl Error {
    /// Short text meant for the end user rather than the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::HandleNotFound { .. } | Error::InvalidHandle(_) => {
                "Error fetching GitHub data. Please check the username."
            }
            Error::Network(_) => "Could not reach GitHub. Please try again.",
            Error::InvalidTheme(_) => {
                "Unknown theme. Pick one of: minimal, neon-green, neon-blue, hologram, midnight-tokyo, industrial."
            }
        }
    }
}
