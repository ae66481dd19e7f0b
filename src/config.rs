//! Runtime configuration for the football-data client.
//!
//! Values are layered: built-in defaults, then the optional
//! `<config_dir>/footy/config.toml`, then environment variables.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{
    error::FootyError, Result, API_KEY_ENV_VAR, BASE_URL_ENV_VAR, HTTP_TIMEOUT_ENV_VAR,
};


/// Competitions endpoint of the football-data.org v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4/competitions";

pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// On-disk configuration; every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub http_timeout_seconds: Option<u64>,
}

impl FileConfig {
    /// Read a config file. A missing file yields an empty config.
    pub fn read(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(FootyError::Config {
                message: format!("failed to read {}: {}", path.display(), e),
            }),
        }
    }
}

/// Path: ~/.config/footy/config.toml
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("footy").join("config.toml")
}

/// Everything the request dispatcher needs.
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECONDS),
        }
    }

    /// Load from `.env`, the default config file and the process environment.
    pub fn load() -> Result<Self> {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();
        Self::load_from(&config_path())
    }

    /// Load from the config file at `path` and the process environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "reading config file");
        let file = FileConfig::read(path)?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge file values with environment lookups; the environment wins.
    pub fn resolve<F>(file: FileConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_ENV_VAR)
            .or(file.api_key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| FootyError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            })?;

        let base_url = non_empty(BASE_URL_ENV_VAR)
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        let timeout_seconds = match non_empty(HTTP_TIMEOUT_ENV_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| FootyError::Config {
                message: format!("{HTTP_TIMEOUT_ENV_VAR} must be a whole number of seconds: {e}"),
            })?,
            None => file
                .http_timeout_seconds
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECONDS),
        };
        if timeout_seconds == 0 {
            return Err(FootyError::Config {
                message: "HTTP timeout must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_seconds),
        })
    }
}
