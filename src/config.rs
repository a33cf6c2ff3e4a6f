//! Environment-driven configuration.

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_FILE: &str = "admin-session.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote admin API, without a trailing slash.
    pub api_url: String,
    pub port: u16,
    /// Where the session record is persisted across restarts.
    pub session_file: PathBuf,
    pub cookie_secure: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_URL is required")]
    MissingApiUrl,
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn normalize_api_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

impl Config {
    /// Load from `API_URL`, `PORT`, `SESSION_FILE`, and `COOKIE_SECURE`.
    ///
    /// # Errors
    ///
    /// Returns an error when `API_URL` is missing or `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("API_URL")
            .map(|raw| normalize_api_url(&raw))
            .map_err(|_| ConfigError::MissingApiUrl)?;
        if api_url.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let session_file = std::env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or(false);

        Ok(Self { api_url, port, session_file, cookie_secure })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
