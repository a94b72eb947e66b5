use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Fallback API base when neither the environment nor the config file
/// provides one.
pub const DEFAULT_API_BASE: &str = "https://birthday-day-info.onrender.com";

/// Environment variable that overrides every other source of the API base.
pub const API_BASE_ENV: &str = "DAYINFO_API_BASE";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional day-info API base URL, e.g. "http://127.0.0.1:8000".
    pub api_base: Option<String>,
}

impl Config {
    /// Resolve the API base: environment override first, then the config
    /// file, then [`DEFAULT_API_BASE`].
    pub fn resolve_api_base(&self) -> String {
        self.resolve_api_base_from(std::env::var(API_BASE_ENV).ok())
    }

    fn resolve_api_base_from(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    pub fn set_api_base(&mut self, api_base: String) {
        self.api_base = Some(api_base);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "day-info", "dayinfo-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_resolves_to_hardcoded_base() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_api_base_from(None), DEFAULT_API_BASE);
    }

    #[test]
    fn config_file_base_beats_the_default() {
        let mut cfg = Config::default();
        cfg.set_api_base("http://127.0.0.1:8000".to_string());

        assert_eq!(cfg.resolve_api_base_from(None), "http://127.0.0.1:8000");
    }

    #[test]
    fn env_override_beats_everything() {
        let mut cfg = Config::default();
        cfg.set_api_base("http://127.0.0.1:8000".to_string());

        let resolved = cfg.resolve_api_base_from(Some("http://10.0.0.1:9000".to_string()));
        assert_eq!(resolved, "http://10.0.0.1:9000");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_api_base_from(Some("  ".to_string())), DEFAULT_API_BASE);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_base("http://127.0.0.1:8000".to_string());

        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.api_base.as_deref(), Some("http://127.0.0.1:8000"));
    }
}
