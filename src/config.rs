//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local use.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Backend used when `PLANNING_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "http://localhost:9090/projet-planning-intelligent";

/// Session file used when `PLANNING_SESSION_FILE` is not set.
pub const DEFAULT_SESSION_FILE: &str = ".planning-session.json";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin plus path prefix of the planning backend (no trailing slash)
    pub api_base_url: String,
    /// Where the durable session (userId, username) is kept
    pub session_file: PathBuf,
    /// Per-request deadline; `None` leaves the network stack default
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let request_timeout = match env::var("PLANNING_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("PLANNING_REQUEST_TIMEOUT_SECS", raw))?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            api_base_url: normalize_base_url(
                &env::var("PLANNING_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            ),
            session_file: env::var("PLANNING_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            request_timeout,
        })
    }

    /// Same config pointed at another backend.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = normalize_base_url(base_url);
        self
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("PLANNING_API_BASE", "http://planning.test/app/");
        env::set_var("PLANNING_SESSION_FILE", "/tmp/session.json");
        env::set_var("PLANNING_REQUEST_TIMEOUT_SECS", "15");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_base_url, "http://planning.test/app");
        assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));

        env::set_var("PLANNING_REQUEST_TIMEOUT_SECS", "soon");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PLANNING_REQUEST_TIMEOUT_SECS", _))
        ));

        env::remove_var("PLANNING_API_BASE");
        env::remove_var("PLANNING_SESSION_FILE");
        env::remove_var("PLANNING_REQUEST_TIMEOUT_SECS");
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = Config::default().with_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:1234");
        assert!(config.request_timeout.is_none());
    }
}
