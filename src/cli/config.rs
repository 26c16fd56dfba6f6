//! Service configuration
//!
//! Sources, lowest priority first: built-in defaults, the optional JSON
//! config file, environment (`PORT`, `TOKEN`, `DATA_PATH`), CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::article::{RefreshPolicy, WriterAuth};
use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

/// Environment variable holding the listen port
pub const ENV_PORT: &str = "PORT";
/// Environment variable holding the writer token
pub const ENV_TOKEN: &str = "TOKEN";
/// Environment variable holding the data file path
pub const ENV_DATA_PATH: &str = "DATA_PATH";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Article data file (default: "./data.json")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Writer token; unset or empty disables authorization
    #[serde(default)]
    pub token: Option<String>,

    /// CORS allowed origins; empty mirrors the request origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// When the store re-reads the data file
    #[serde(default)]
    pub refresh_policy: RefreshPolicy,

    /// Minimum log severity: "trace", "info", "warn" or "error" (default: "info")
    #[serde(default)]
    pub log_level: Severity,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data.json")
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_path: default_data_path(),
            token: None,
            cors_origins: Vec::new(),
            refresh_policy: RefreshPolicy::default(),
            log_level: Severity::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Defaults, or the file at `path` when given
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT).filter(|p| !p.is_empty()) {
            self.port = port.parse().map_err(|_| {
                CliError::config_error(format!("Invalid {} value: '{}'", ENV_PORT, port))
            })?;
        }

        if let Some(token) = lookup(ENV_TOKEN) {
            self.token = Some(token);
        }

        if let Some(path) = lookup(ENV_DATA_PATH).filter(|p| !p.is_empty()) {
            self.data_path = PathBuf::from(path);
        }

        Ok(())
    }

    /// Apply CLI flag overrides
    pub fn apply_flags(&mut self, port: Option<u16>, data: Option<PathBuf>) {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(data) = data {
            self.data_path = data;
        }
    }

    /// Resolve the full configuration from file, process environment and flags
    pub fn resolve(
        path: Option<&Path>,
        port: Option<u16>,
        data: Option<PathBuf>,
    ) -> CliResult<Self> {
        let mut config = Self::load_or_default(path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_flags(port, data);
        config.validate()?;
        Ok(config)
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> CliResult<()> {
        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.data_path.as_os_str().is_empty() {
            return Err(CliError::config_error("data_path must not be empty"));
        }

        if self.host.is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        Ok(())
    }

    /// HTTP listener settings
    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }

    /// Writer gate built from the configured token
    pub fn writer_auth(&self) -> WriterAuth {
        WriterAuth::new(self.token.clone())
    }
}
