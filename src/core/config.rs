use std::fs;
use std::path::Path;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use tracing::debug;

use crate::errors::CleanerError;

/// Contents of the YAML settings file.
///
/// ```yaml
/// apitoken: xoxb-...
/// conversation: [D0123ABCD]
/// userid: [U0123ABCD, U0456EFGH]
/// ```
#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(rename = "apitoken", default = "empty_token")]
    pub api_token: Secret<String>,
    #[serde(rename = "conversation", default)]
    pub conversations: Vec<String>,
    #[serde(rename = "userid", default)]
    pub user_ids: Vec<String>,
}

fn empty_token() -> Secret<String> {
    Secret::new(String::new())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_token: empty_token(),
            conversations: Vec::new(),
            user_ids: Vec::new(),
        }
    }
}

impl Settings {
    /// Parse settings from YAML text without validating them.
    ///
    /// # Errors
    ///
    /// Returns `CleanerError::Parse` if the text is not a valid settings document.
    /// An empty or null document yields default (and therefore invalid) settings.
    pub fn from_yaml(raw: &str) -> Result<Self, CleanerError> {
        let settings: Option<Self> = serde_yaml::from_str(raw)?;
        Ok(settings.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `CleanerError::InvalidConfig` when the token is missing or no targets are named.
    pub fn validate(self) -> Result<Self, CleanerError> {
        if self.api_token.expose_secret().trim().is_empty() {
            return Err(CleanerError::InvalidConfig("invalid api token".to_string()));
        }
        if self.user_ids.is_empty() && self.conversations.is_empty() {
            return Err(CleanerError::InvalidConfig(
                "need either one user or conversation".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Read, parse and validate the settings file at `path`.
///
/// # Errors
///
/// `Io` if the file can't be read, `Parse` on malformed YAML, `InvalidConfig` on failed validation.
pub fn load_config(path: &Path) -> Result<Settings, CleanerError> {
    let raw = fs::read_to_string(path).map_err(|source| CleanerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let settings = Settings::from_yaml(&raw)?.validate()?;
    debug!(
        path = %path.display(),
        conversations = settings.conversations.len(),
        users = settings.user_ids.len(),
        "loaded settings"
    );
    Ok(settings)
}
