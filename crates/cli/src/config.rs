use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spool_core::Owner;
use spool_scheduler::SchedulerConfig;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable naming the default job owner.
pub const OWNER_ENV: &str = "SPOOL_OWNER";

/// CLI configuration loaded from TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Owner recorded on jobs submitted from this console
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Prompt shown before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Scheduling engine settings
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

fn default_owner() -> String {
    Owner::default().name
}

fn default_prompt() -> String {
    "Printer OS> ".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            prompt: default_prompt(),
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl CliConfig {
    /// Return the default config directory path: ~/.config/spool/
    pub fn default_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("spool");
        Ok(config_dir)
    }

    /// Return the default config file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// Returns default config if the file does not exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            debug!(?config_path, "Loading config");
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
            Ok(config)
        } else {
            debug!(?config_path, "Config file not found, using defaults");
            let config = Self::default();
            // Create directory and write default config
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    debug!(error = %e, ?parent, "Could not create config directory");
                }
            }
            let toml_str = toml::to_string_pretty(&config)
                .context("failed to serialize default config")?;
            if let Err(e) = std::fs::write(&config_path, toml_str) {
                debug!(error = %e, ?config_path, "Could not write default config");
            }
            Ok(config)
        }
    }

    /// Resolve the owner for submitted jobs.
    /// Priority: cli_override > env var > config file.
    pub fn resolve_owner(&self, cli_override: Option<&str>) -> Owner {
        if let Some(name) = cli_override {
            return Owner::new(name);
        }
        if let Ok(name) = std::env::var(OWNER_ENV) {
            if !name.trim().is_empty() {
                return Owner::new(name);
            }
        }
        Owner::new(self.owner.clone())
    }

    /// Scheduler settings with command-line overrides applied.
    pub fn resolve_scheduler(&self, no_auto_fill: bool, history: Option<usize>) -> SchedulerConfig {
        let mut config = self.scheduler.clone();
        if no_auto_fill {
            config.auto_fill_on_vacancy = false;
        }
        if let Some(capacity) = history {
            config.history_capacity = capacity;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.owner, "Console User");
        assert_eq!(config.prompt, "Printer OS> ");
        assert!(config.scheduler.auto_fill_on_vacancy);
    }

    #[test]
    fn test_resolve_owner_cli_override() {
        let config = CliConfig::default();
        assert_eq!(config.resolve_owner(Some("alice")), Owner::new("alice"));
    }

    #[test]
    fn test_resolve_scheduler_overrides() {
        let config = CliConfig::default();
        let resolved = config.resolve_scheduler(true, Some(5));
        assert!(!resolved.auto_fill_on_vacancy);
        assert_eq!(resolved.history_capacity, 5);

        let untouched = config.resolve_scheduler(false, None);
        assert_eq!(untouched, config.scheduler);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "owner = \"print-room\"\n\n[scheduler]\nauto_fill_on_vacancy = false\n")
            .unwrap();

        let config = CliConfig::load(path.to_str()).unwrap();
        assert_eq!(config.owner, "print-room");
        assert_eq!(config.prompt, "Printer OS> ");
        assert!(!config.scheduler.auto_fill_on_vacancy);
        assert_eq!(config.scheduler.history_capacity, 64);
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = CliConfig::load(path.to_str()).unwrap();
        assert_eq!(config.owner, "Console User");
        assert!(path.exists());

        let reloaded = CliConfig::load(path.to_str()).unwrap();
        assert_eq!(reloaded.prompt, config.prompt);
    }

    #[test]
    fn test_load_falls_back_when_defaults_cannot_be_written() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("config.toml");

        let config = CliConfig::load(path.to_str()).unwrap();
        assert_eq!(config.owner, "Console User");
        assert!(config.scheduler.auto_fill_on_vacancy);
        assert!(!path.exists());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "owner = [").unwrap();
        assert!(CliConfig::load(path.to_str()).is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CliConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.owner, config.owner);
        assert_eq!(parsed.scheduler, config.scheduler);
    }
}
