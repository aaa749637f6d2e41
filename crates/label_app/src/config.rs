//! Application configuration.
//!
//! Values come from built-in defaults, then an optional RON file, then
//! command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use label_engine::{ClientSettings, EngineConfig, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;
use crate::platform::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid server url {url:?}: {source}")]
    ServerUrl {
        url: String,
        source: label_engine::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server_url: String,
    pub debounce_delay_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5099".to_string(),
            debounce_delay_ms: 2000,
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
            max_response_bytes: 16 * 1024 * 1024,
            log_destination: LogDestination::File,
            log_file: PathBuf::from("./label_app.log"),
        }
    }
}

impl AppConfig {
    /// Loads `path` if given, falling back to defaults for absent fields.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(server) = &cli.server {
            self.server_url = server.clone();
        }
        if let Some(debounce_ms) = cli.debounce_ms {
            self.debounce_delay_ms = debounce_ms;
        }
        if let Some(destination) = cli.log {
            self.log_destination = destination;
        }
    }

    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let base_url = Url::parse(&self.server_url).map_err(|source| ConfigError::ServerUrl {
            url: self.server_url.clone(),
            source,
        })?;
        let client = ClientSettings {
            base_url,
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_response_bytes,
        };

        let mut config = EngineConfig::new(client);
        config.debounce_delay = Duration::from_millis(self.debounce_delay_ms);
        config.clock = Arc::new(|| chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
        Ok(config)
    }
}
