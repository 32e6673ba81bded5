//! Application configuration management
//!
//! Handles loading application settings including:
//! - Event loop tick rate
//! - The startup contact roster
//!
//! Configuration is read-only at runtime; the session never writes back.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::contact::Contact;
use crate::error::{Result, RoloError};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tick interval for the TUI event loop, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Contacts loaded into the book at startup.
    ///
    /// This only shapes the initial in-memory state; the book is never
    /// written back during a session.
    #[serde(default = "default_seeds")]
    pub seeds: Vec<Contact>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_seeds() -> Vec<Contact> {
    vec![
        Contact::new("John Doe", "123-456-7890", "Friend"),
        Contact::new("Jane Doe", "000-555-999", "Family"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            seeds: default_seeds(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "rolo-rs", "rolo-rs")
            .ok_or_else(|| RoloError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.seeds.len(), 2);
        assert_eq!(config.seeds[0].name, "John Doe");
        assert_eq!(config.seeds[1].phone, "000-555-999");
    }

    #[test]
    fn test_load_from_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
tick_rate_ms = 100

[[seeds]]
name = "Ada"
phone = "1"
description = "Math"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.seeds, vec![Contact::new("Ada", "1", "Math")]);
    }

    #[test]
    fn test_load_from_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(RoloError::Toml(_))
        ));
    }
}
