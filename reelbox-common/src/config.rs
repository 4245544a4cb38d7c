//! Configuration loading for the Reelbox services
//!
//! Every key resolves in priority order:
//! 1. Environment variable (highest priority)
//! 2. `reelbox.toml` in the working directory
//! 3. Compiled default (required keys have none and fail startup)

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default config file looked up next to the process working directory
pub const CONFIG_FILE: &str = "reelbox.toml";

/// Parsed optional TOML settings file
#[derive(Debug, Clone, Default)]
pub struct Settings {
    value: Option<toml::Value>,
}

impl Settings {
    /// Load `reelbox.toml` from the working directory, if present
    ///
    /// A missing file is normal; a malformed file is reported and ignored
    /// so ENV-only deployments keep working.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str::<toml::Value>(&content) {
            Ok(value) => Self { value: Some(value) },
            Err(e) => {
                warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    #[cfg(test)]
    fn from_toml(content: &str) -> Self {
        Self {
            value: Some(toml::from_str(content).expect("valid test TOML")),
        }
    }

    /// Look up `[section] key`, stringifying scalar values
    fn get(&self, section: &str, key: &str) -> Option<String> {
        let entry = self.value.as_ref()?.get(section)?.get(key)?;
        match entry {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Integer(i) => Some(i.to_string()),
            _ => None,
        }
    }

    /// Resolve one key: ENV → TOML → None
    pub fn resolve(&self, env_var: &str, section: &str, key: &str) -> Option<String> {
        if let Ok(value) = std::env::var(env_var) {
            if !value.is_empty() {
                return Some(value);
            }
        }
        self.get(section, key)
    }
}

/// Backend API (reelbox-api) configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub database_path: PathBuf,
    pub omdb_backend_url: String,
    pub refresh_time_ms: u64,
}

impl ApiConfig {
    pub fn load(settings: &Settings) -> Result<Self> {
        let omdb_backend_url = settings
            .resolve("REELBOX_OMDB_BACKEND_URL", "api", "omdb_backend_url")
            .ok_or_else(|| Error::Config("REELBOX_OMDB_BACKEND_URL is required".to_string()))?;

        let database_path = settings
            .resolve("REELBOX_DATABASE_PATH", "api", "database_path")
            .unwrap_or_else(|| "reelbox.db".to_string());

        let refresh_time_ms = match settings.resolve("REELBOX_REFRESH_TIME_MS", "api", "refresh_time_ms") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| Error::Config(format!("REELBOX_REFRESH_TIME_MS is not a number: {raw}")))?,
            None => {
                warn!("Missing REELBOX_REFRESH_TIME_MS. Defaulting to 1 hour");
                3_600_000
            }
        };

        let port = parse_port(
            settings
                .resolve("REELBOX_API_PORT", "api", "port")
                .unwrap_or_else(|| "4000".to_string()),
        )?;

        Ok(Self {
            port,
            database_path: PathBuf::from(database_path),
            omdb_backend_url,
            refresh_time_ms,
        })
    }
}

/// Upstream-facing service (reelbox-omdb) configuration
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
}

impl OmdbConfig {
    pub fn load(settings: &Settings) -> Result<Self> {
        let api_key = settings
            .resolve("REELBOX_OMDB_API_KEY", "omdb", "api_key")
            .ok_or_else(|| Error::Config("REELBOX_OMDB_API_KEY is required".to_string()))?;

        let base_url = settings
            .resolve("REELBOX_OMDB_BASE_URL", "omdb", "base_url")
            .unwrap_or_else(|| "https://www.omdbapi.com/".to_string());

        let port = parse_port(
            settings
                .resolve("REELBOX_OMDB_PORT", "omdb", "port")
                .unwrap_or_else(|| "4001".to_string()),
        )?;

        Ok(Self {
            port,
            api_key,
            base_url,
        })
    }
}

fn parse_port(raw: String) -> Result<u16> {
    raw.parse::<u16>()
        .map_err(|_| Error::Config(format!("invalid port: {raw}")))
}
