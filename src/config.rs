//! Application-level configuration loading for the overlay backend.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "PITCHSIDE_BACK_CONFIG_PATH";
/// Default directory holding the persisted overlay documents.
const DEFAULT_DATA_DIR: &str = "data";
/// Default change-bus channel capacity.
const DEFAULT_BUS_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Directory the file-backed store keeps its documents in.
    pub data_dir: PathBuf,
    /// Capacity of the change-bus broadcast channel.
    pub bus_capacity: usize,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        data_dir = %config.data_dir.display(),
                        "loaded configuration"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            bus_capacity: DEFAULT_BUS_CAPACITY,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON representation of the configuration file located at
/// [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    data_dir: Option<PathBuf>,
    bus_capacity: Option<usize>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            data_dir: value.data_dir.unwrap_or(defaults.data_dir),
            bus_capacity: value.bus_capacity.unwrap_or(defaults.bus_capacity),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_config_fills_missing_fields_from_defaults() {
        let raw: RawConfig = serde_json::from_str(r#"{"dataDir":"/tmp/overlay"}"#).unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/overlay"));
        assert_eq!(config.bus_capacity, DEFAULT_BUS_CAPACITY);
    }
}
