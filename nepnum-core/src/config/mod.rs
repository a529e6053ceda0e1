//! nepnum configuration
//!
//! Loaded from `{config_dir}/nepnum/config.toml`; defaults apply when the
//! file is absent.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{NepNumError, NepNumResult};

/// CLI-facing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NepNumConfig {
    /// Default output language tag ("en" or "np")
    pub language: String,
}

impl Default for NepNumConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
        }
    }
}

impl NepNumConfig {
    /// Load the config file, falling back to defaults when absent.
    pub fn load() -> NepNumResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("config file absent, using defaults: {:?}", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|err| NepNumError::ConfigParse {
            path: config_path.display().to_string(),
            reason: err.to_string(),
        })?;

        tracing::info!("loaded config: {:?}", config_path);
        Ok(config)
    }

    /// Save the config file.
    pub fn save(&self) -> NepNumResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|err| NepNumError::ConfigParse {
            path: config_path.display().to_string(),
            reason: err.to_string(),
        })?;
        std::fs::write(&config_path, content)?;

        tracing::info!("saved config: {:?}", config_path);
        Ok(())
    }

    fn config_path() -> NepNumResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| NepNumError::ConfigNotFound("no user config directory".to_string()))?;

        Ok(config_dir.join("nepnum").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        assert_eq!(NepNumConfig::default().language, "en");
    }

    #[test]
    fn test_parse_toml() {
        let config: NepNumConfig = toml::from_str("language = \"np\"").unwrap();
        assert_eq!(config.language, "np");
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = NepNumConfig {
            language: "np".to_string(),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: NepNumConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.language, config.language);
    }
}
