//! Pokedex configuration with persistence
//!
//! Settings live in `~/.config/pokedex/config.toml` unless a path is given.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{ConfigError, ConfigResult};

/// Environment variable that overrides `[store] path`.
pub const STORE_PATH_ENV: &str = "POKEDEX_STORE";

/// All configuration sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    pub store: StoreConfig,
    pub combat: CombatConfig,
    pub presentation: PresentationConfig,
    pub logging: LoggingConfig,
}

impl PokedexConfig {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pokedex"))
    }

    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load a config file, failing on any I/O or parse error.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: PokedexConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from `path` (or the default location), or return defaults if the
    /// file is missing or unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    warn!("Could not determine config directory");
                    return Self::with_env_overrides();
                }
            },
        };

        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::with_env_overrides();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::with_env_overrides()
            }
        }
    }

    /// Save the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved config to {:?}", path);
        Ok(())
    }

    fn with_env_overrides() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Some(path) = env::var_os(STORE_PATH_ENV) {
            self.store.path = PathBuf::from(path);
        }
    }
}

/// Roster store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Roster document location
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let path = dirs::data_local_dir()
            .map(|dir| dir.join("pokedex").join("roster.ron"))
            .unwrap_or_else(|| PathBuf::from("roster.ron"));
        Self { path }
    }
}

/// Fight resolution settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Hits logged one by one before the rest of a fight is summarized
    pub max_recorded_rounds: u64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            max_recorded_rounds: 1000,
        }
    }
}

/// How a fight is shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Shortest "thinking time" before the outcome is revealed
    pub fight_delay_min_ms: u64,
    /// Longest "thinking time" before the outcome is revealed
    pub fight_delay_max_ms: u64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            fight_delay_min_ms: 2000,
            fight_delay_max_ms: 4000,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Max level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level, falling back to INFO on unknown names.
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}
