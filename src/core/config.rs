use crate::core::currency::Currency;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_PRICES_FILE: &str = "historical_silver_price.csv";
pub const DEFAULT_STATES_FILE: &str = "state_wise_silver_purchased_kg.csv";

/// Dataset locations. Unset paths fall back to the default file names in the
/// working directory.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct DataConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<PathBuf>,
}

impl DataConfig {
    pub fn prices_path(&self) -> PathBuf {
        self.prices
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PRICES_FILE))
    }

    pub fn states_path(&self) -> PathBuf {
        self.states
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATES_FILE))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 60,
            height: 12,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no config file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "silvercalc", "silvercalc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    /// Reads a config file. Relative data paths set in the file are resolved
    /// against the directory containing it.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.data.prices = config.data.prices.map(|p| resolve(base, &p));
            config.data.states = config.data.states.map(|p| resolve(base, &p));
        }
        debug!("Successfully loaded config");
        Ok(config)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
