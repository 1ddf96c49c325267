//! Configuration file support for liftrx.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftrx/config.toml`.

use crate::tables::ScalingTables;
use crate::{AgeGroup, Error, Intensity, Phase, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub athlete: AthleteConfig,

    #[serde(default)]
    pub warmup: WarmupConfig,

    #[serde(default)]
    pub scaling: ScalingTables,
}

/// Defaults used when the CLI is not told otherwise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AthleteConfig {
    #[serde(default)]
    pub age_group: AgeGroup,

    #[serde(default = "default_phase")]
    pub phase: Phase,

    #[serde(default = "default_intensity")]
    pub intensity: Intensity,
}

impl Default for AthleteConfig {
    fn default() -> Self {
        Self {
            age_group: AgeGroup::default(),
            phase: default_phase(),
            intensity: default_intensity(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WarmupConfig {
    #[serde(default = "default_include_optional")]
    pub include_optional: bool,
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            include_optional: default_include_optional(),
        }
    }
}

// Default value functions
fn default_phase() -> Phase {
    Phase::Gpp
}

fn default_intensity() -> Intensity {
    Intensity::Moderate
}

fn default_include_optional() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// Scaling overrides are checked; an inconsistent table is rejected.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        let errors = config.scaling.validate();
        if !errors.is_empty() {
            return Err(Error::Config(format!(
                "invalid [scaling] in {:?}: {}",
                path,
                errors.join("; ")
            )));
        }
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => dirs::home_dir()
                .map(|home| home.join(".config"))
                .ok_or_else(|| Error::Config("cannot locate a config directory".into()))?,
        };
        Ok(base.join("liftrx").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
