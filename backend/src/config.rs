//! Server configuration file support.
//!
//! Settings come from an `explorer.toml` file when one is found, then
//! environment variables override individual values. Every field has a
//! default, so running without any file is valid.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ExplorerError, ExplorerResult};
use crate::services::projection::ProjectionSettings;

pub const CONFIG_FILE_NAME: &str = "explorer.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub projection: ProjectionSettings,
}

/// Listen address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// ML backend the proxy endpoints forward to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Mock analysis endpoint behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Simulated processing time before the mock answers
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_mock_delay_ms() -> u64 {
    2000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            mock_delay_ms: default_mock_delay_ms(),
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ExplorerResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ExplorerError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ExplorerResult<Self> {
        let config: ExplorerConfig = toml::from_str(content).map_err(|e| {
            ExplorerError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// First `explorer.toml` found in the standard locations.
    ///
    /// Searches:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn find_default_path() -> Option<PathBuf> {
        [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Resolve the effective configuration for the server.
    ///
    /// `EXPLORER_CONFIG` names an explicit file. Otherwise the standard
    /// locations are searched and defaults are used when nothing is found.
    /// Environment overrides are applied last.
    pub fn load() -> ExplorerResult<Self> {
        let mut config = match env::var("EXPLORER_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => match Self::find_default_path() {
                Some(path) => {
                    log::info!("Loading configuration from {}", path.display());
                    Self::from_file(path)?
                }
                None => {
                    log::info!("No {} found, using defaults", CONFIG_FILE_NAME);
                    Self::default()
                }
            },
        };

        config.apply_env()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> ExplorerResult<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Blank values are ignored. `BACKEND_URL` wins over
    /// `NEXT_PUBLIC_BACKEND_URL` when both are set.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ExplorerResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(host) = get("HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("PORT") {
            self.server.port = parse_env("PORT", &port)?;
        }
        if let Some(url) = get("BACKEND_URL").or_else(|| get("NEXT_PUBLIC_BACKEND_URL")) {
            self.backend.base_url = url;
        }
        if let Some(timeout) = get("BACKEND_TIMEOUT_SECS") {
            self.backend.timeout_secs = parse_env("BACKEND_TIMEOUT_SECS", &timeout)?;
        }
        if let Some(delay) = get("MOCK_ANALYSIS_DELAY_MS") {
            self.analysis.mock_delay_ms = parse_env("MOCK_ANALYSIS_DELAY_MS", &delay)?;
        }

        self.validate()
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> ExplorerResult<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ExplorerError::Configuration(
                "backend.base_url must not be empty".to_string(),
            ));
        }
        if self.backend.timeout_secs == 0 {
            return Err(ExplorerError::Configuration(
                "backend.timeout_secs must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("projection.primary_scale", self.projection.primary_scale),
            ("projection.compact_scale", self.projection.compact_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ExplorerError::Configuration(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// `host:port` string for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.analysis.mock_delay_ms)
    }

    pub fn projection_settings(&self) -> ProjectionSettings {
        self.projection
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> ExplorerResult<T> {
    value.parse().map_err(|_| {
        ExplorerError::Configuration(format!("Invalid value for {}: '{}'", key, value))
    })
}
