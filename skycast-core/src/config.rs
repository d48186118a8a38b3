use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable that overrides the config-file API key.
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com API key. `SKYCAST_API_KEY` takes precedence.
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, the env var may still carry the key.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the API key: environment variable first, then the config file.
    ///
    /// The key is a credential and must never be logged or echoed.
    pub fn resolved_api_key(&self) -> Result<String> {
        resolve_api_key(env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }
}

fn resolve_api_key(env_value: Option<String>, file_value: Option<&str>) -> Result<String> {
    if let Some(key) = env_value
        && !key.trim().is_empty()
    {
        return Ok(key);
    }

    file_value
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: set the {API_KEY_ENV} environment variable, or put `api_key = \"...\"` \
                 in the config file."
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_wins_over_file_value() {
        let key = resolve_api_key(Some("ENV_KEY".into()), Some("FILE_KEY")).unwrap();
        assert_eq!(key, "ENV_KEY");
    }

    #[test]
    fn file_value_used_when_env_absent() {
        let key = resolve_api_key(None, Some("FILE_KEY")).unwrap();
        assert_eq!(key, "FILE_KEY");
    }

    #[test]
    fn blank_env_value_falls_through_to_file() {
        let key = resolve_api_key(Some("   ".into()), Some("FILE_KEY")).unwrap();
        assert_eq!(key, "FILE_KEY");
    }

    #[test]
    fn missing_key_errors_with_hint() {
        let err = resolve_api_key(None, None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains(API_KEY_ENV));
    }

    #[test]
    fn blank_file_value_is_treated_as_missing() {
        let err = resolve_api_key(None, Some("  ")).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let cfg = Config { api_key: Some("abc123".into()) };

        let toml = toml::to_string(&cfg).expect("serialize");
        let back: Config = toml::from_str(&toml).expect("parse");

        assert_eq!(back.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn empty_toml_parses_to_default() {
        let cfg: Config = toml::from_str("").expect("empty file is valid");
        assert!(cfg.api_key.is_none());
    }
}
