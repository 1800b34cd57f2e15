//! Configuration management for Menagerie
//!
//! Settings are optional: a missing `.menagerie/config.toml` means defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::checkup::default_candidate_statuses;
use crate::zoo::Zoo;
use crate::{MenagerieError, Result};

/// Directory (relative to the root) holding the config file
pub const CONFIG_DIR: &str = ".menagerie";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Repository-level Menagerie configuration
///
/// Loaded from `.menagerie/config.toml` under the chosen root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenagerieConfig {
    /// Display name of the zoo built by the tour
    #[serde(default = "default_zoo_name")]
    pub zoo_name: String,

    /// Health checkup settings
    #[serde(default)]
    pub checkup: CheckupConfig,

    /// Narration layout
    #[serde(default)]
    pub narration: NarrationConfig,
}

/// Health checkup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckupConfig {
    /// Statuses a checkup draws from; duplicates weight the draw
    #[serde(default = "default_candidate_statuses")]
    pub candidate_statuses: Vec<String>,

    /// Fixed seed for reproducible checkups
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Narration layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationConfig {
    /// Width of `=====` section banners
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,
}

// Default value providers
fn default_zoo_name() -> String {
    "City Zoo".to_string()
}

fn default_banner_width() -> usize {
    80
}

impl MenagerieConfig {
    /// Load configuration from `.menagerie/config.toml` or use defaults
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content).map_err(|e| {
                MenagerieError::Config(format!("Failed to parse config file: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `.menagerie/config.toml`
    pub fn write_default(root: &Path) -> Result<std::path::PathBuf> {
        let config_dir = root.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(&Self::default()).map_err(|e| {
            MenagerieError::Config(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.checkup.candidate_statuses.is_empty() {
            return Err(MenagerieError::Config(
                "checkup.candidate_statuses cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Empty zoo named and configured from this config
    pub fn build_zoo(&self) -> Result<Zoo> {
        Zoo::new(&self.zoo_name).with_candidate_statuses(self.checkup.candidate_statuses.clone())
    }
}

impl Default for MenagerieConfig {
    fn default() -> Self {
        Self {
            zoo_name: default_zoo_name(),
            checkup: CheckupConfig::default(),
            narration: NarrationConfig::default(),
        }
    }
}

impl Default for CheckupConfig {
    fn default() -> Self {
        Self {
            candidate_statuses: default_candidate_statuses(),
            seed: None,
        }
    }
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            banner_width: default_banner_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = MenagerieConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, MenagerieConfig::default());
        assert_eq!(config.narration.banner_width, 80);
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = MenagerieConfig::write_default(dir.path()).unwrap();
        assert!(path.ends_with(".menagerie/config.toml"));

        let loaded = MenagerieConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(loaded, MenagerieConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join(CONFIG_FILE),
            "zoo_name = \"Harbor Zoo\"\n\n[checkup]\nseed = 42\n",
        )
        .unwrap();

        let config = MenagerieConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.zoo_name, "Harbor Zoo");
        assert_eq!(config.checkup.seed, Some(42));
        assert_eq!(
            config.checkup.candidate_statuses,
            default_candidate_statuses()
        );
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join(CONFIG_FILE),
            "[checkup]\ncandidate_statuses = []\n",
        )
        .unwrap();

        let err = MenagerieConfig::load_or_default(dir.path()).unwrap_err();
        assert!(matches!(err, MenagerieError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILE), "zoo_name = [").unwrap();

        assert!(matches!(
            MenagerieConfig::load_or_default(dir.path()),
            Err(MenagerieError::Config(_))
        ));
    }

    #[test]
    fn test_build_zoo_uses_config() {
        let mut config = MenagerieConfig::default();
        config.zoo_name = "Harbor Zoo".to_string();
        config.checkup.candidate_statuses = vec!["fine".to_string()];

        let zoo = config.build_zoo().unwrap();
        assert_eq!(zoo.name(), "Harbor Zoo");
        assert_eq!(zoo.candidate_statuses(), &["fine".to_string()]);
    }
}
