// src/config.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::core::knowledge_base::HeuristicRule;
use crate::core::locale::Locale;
use crate::logging::get_config_dir;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "TRACUS_CONFIG";

pub const DEFAULT_REGISTRY_ENDPOINT: &str = "https://whoisjsonapi.com/api/v1/whois";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings loaded from `config.toml`. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language of findings, sentinels and the report ("en" or "pt").
    pub locale: Locale,
    /// Timeout applied to the page fetches of the page counter and the heuristic scanner.
    pub page_timeout_secs: u64,
    /// Registry API queried with `?domain=<hostname>`.
    pub registry_endpoint: String,
    /// Optional timeout for the registry call. Unset means the client default (none).
    pub registry_timeout_secs: Option<u64>,
    pub user_agent: String,
    /// Directory reports are written to.
    pub report_dir: PathBuf,
    /// Extra heuristics evaluated after the built-in ones.
    pub rules: Vec<HeuristicRule>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            page_timeout_secs: 10,
            registry_endpoint: DEFAULT_REGISTRY_ENDPOINT.to_string(),
            registry_timeout_secs: None,
            user_agent: format!("TracuS/{}", env!("CARGO_PKG_VERSION")),
            report_dir: PathBuf::from("."),
            rules: Vec::new(),
        }
    }
}

impl Settings {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn registry_timeout(&self) -> Option<Duration> {
        self.registry_timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => PathBuf::from(path),
        None => get_config_dir().join("config.toml"),
    }
}

/// Loads settings from the default location; a missing file yields defaults.
pub fn load() -> Result<Settings, ConfigError> {
    load_from(&config_path())
}

pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "No config file found, using defaults.");
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Loaded config.");
    Ok(settings)
}
