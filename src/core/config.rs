use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

use super::cache::DEFAULT_CAPACITY;

pub const DEFAULT_BASE_URL: &str = "https://www.bankofcanada.ca/valet";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; the HTTP client default applies when unset.
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_cache_capacity() -> usize {
    DEFAULT_CAPACITY.get()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            provider: ProviderConfig::default(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ca", "noonrate", "noonrate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config = Self::from_yaml(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        if config.cache_capacity == 0 {
            bail!("cache_capacity must be at least 1");
        }
        Ok(config)
    }

    pub fn cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cache_capacity).unwrap_or(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/valet"
  timeout_secs: 5
cache_capacity: 16
"#;

        let config = AppConfig::from_yaml(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://example.com/valet");
        assert_eq!(config.provider.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.cache_capacity().get(), 16);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert!(config.provider.timeout().is_none());
        assert_eq!(config.cache_capacity().get(), 8);

        let config = AppConfig::from_yaml("provider:\n  timeout_secs: 3\n").unwrap();
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.provider.timeout_secs, Some(3));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let err = AppConfig::from_yaml("cache_capacity: 0").unwrap_err();
        assert!(err.to_string().contains("cache_capacity"));
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("absent.yaml"));
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }
}
