use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the configured backend root API URL
pub const BACKEND_URL_ENV: &str = "ZIMSEARCH_BACKEND_URL";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
}

/// Search backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Root API URL of the library backend, e.g. `http://localhost:8000/api/v1`.
    pub root_url: String,
    /// HTTP timeout in seconds for each page request.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            root_url: "http://localhost:8000/api/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

impl BackendConfig {
    /// Root URL with the environment override applied.
    pub fn resolved_root_url(&self) -> String {
        std::env::var(BACKEND_URL_ENV).unwrap_or_else(|_| self.root_url.clone())
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/zimsearch/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("zimsearch").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
