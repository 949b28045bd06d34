use std::path::PathBuf;

use slack_morphism::errors::SlackClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanerError {
    #[error("Failed to read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file: {0}")]
    Parse(String),

    #[error("Invalid Config File: {0}")]
    InvalidConfig(String),

    #[error("Failed to access Slack API: {0}")]
    Platform(String),

    #[error("Slack rate limit exceeded: {0}")]
    RateLimited(String),
}

impl CleanerError {
    /// Whether this error is the transient rate-limit signal the delete loop backs off on.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, CleanerError::RateLimited(_))
    }
}

/// Slack reports throttling either as HTTP 429 or as an `ok: false` body with one of these codes.
const RATE_LIMIT_CODES: [&str; 2] = ["ratelimited", "rate_limited"];

/// Decide from an error's text whether Slack is asking us to slow down.
#[must_use]
pub fn is_rate_limit_message(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("rate limit") || RATE_LIMIT_CODES.iter().any(|code| lower.contains(code))
}

impl From<SlackClientError> for CleanerError {
    fn from(error: SlackClientError) -> Self {
        match &error {
            SlackClientError::RateLimitError(_) => CleanerError::RateLimited(error.to_string()),
            SlackClientError::ApiError(api) if RATE_LIMIT_CODES.contains(&api.code.as_str()) => {
                CleanerError::RateLimited(error.to_string())
            }
            _ => {
                let message = error.to_string();
                if is_rate_limit_message(&message) {
                    CleanerError::RateLimited(message)
                } else {
                    CleanerError::Platform(message)
                }
            }
        }
    }
}

impl From<serde_yaml::Error> for CleanerError {
    fn from(error: serde_yaml::Error) -> Self {
        CleanerError::Parse(error.to_string())
    }
}
