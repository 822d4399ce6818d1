mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::BablaError;
use defaults::*;

/// Environment variable naming the translation store file.
pub const DB_ENV_VAR: &str = "DEARBABLA_DB";

/// Default location of the optional config file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.dearbabla/config.toml";

/// Top-level dearbabla configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dearbabla: GeneralConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Dictionary service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Host (optionally with port) of the dictionary service.
    #[serde(default = "default_host")]
    pub host: String,
    /// Upper bound on the single lookup request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Quiz mode settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Pause before revealing the answer when `--delay` is given.
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            delay_secs: default_delay_secs(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, BablaError> {
    let expanded = shellexpand(path);
    let path = Path::new(&expanded);
    if !path.exists() {
        tracing::debug!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| BablaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)?;

    if config.fetch.timeout_secs == 0 {
        return Err(BablaError::Config(
            "fetch.timeout_secs must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}

/// Validate the store location taken from [`DB_ENV_VAR`].
///
/// The file must already exist; dearbabla never picks a location on its own.
pub fn resolve_db_path(value: Option<&str>) -> Result<PathBuf, BablaError> {
    let raw = value.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(BablaError::Config(format!(
            "database not found: {DB_ENV_VAR} is not set"
        )));
    }

    let path = PathBuf::from(shellexpand(raw));
    if !path.is_file() {
        return Err(BablaError::Config(format!(
            "database not found: {DB_ENV_VAR}={}",
            path.display()
        )));
    }
    Ok(path)
}

/// Read and validate [`DB_ENV_VAR`] from the process environment.
pub fn db_path_from_env() -> Result<PathBuf, BablaError> {
    let value = std::env::var(DB_ENV_VAR).ok();
    resolve_db_path(value.as_deref())
}
