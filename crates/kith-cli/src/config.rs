//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use kith_domain::{Person, PersonId};
use kith_store::MemoryStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Contacts loaded into every session
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
}

/// A contact listed in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Display name
    pub name: String,

    /// Full UUID; a sequential one is assigned when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(kith_dir()?.join("config.toml"))
    }

    /// Load configuration from the default path, writing defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Self::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Load configuration from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Load the configured contacts into `store`, returning how many were added.
    pub fn seed(&self, store: &mut MemoryStore) -> Result<usize> {
        for contact in &self.contacts {
            match &contact.id {
                Some(id) => {
                    let id = PersonId::from_string(id).map_err(|e| {
                        CliError::Config(format!("Contact '{}': {}", contact.name, e))
                    })?;
                    store.insert_person(Person::new(id, contact.name.clone()))?;
                }
                None => {
                    store.add_person(&contact.name)?;
                }
            }
        }
        Ok(self.contacts.len())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

/// The `~/.kith` directory holding config and history.
pub fn kith_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".kith"))
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use kith_domain::PersonDirectory;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.contacts.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.contacts.push(Contact {
            name: "Alice".to_string(),
            id: None,
        });
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Json);
        assert_eq!(loaded.contacts.len(), 1);
        assert_eq!(loaded.contacts[0].name, "Alice");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.history_size, 1000);
    }

    #[test]
    fn test_seed_contacts() {
        let config: Config = toml::from_str(
            r#"
            [[contacts]]
            name = "Alice"
            id = "00000000-0000-0000-0000-000000000005"

            [[contacts]]
            name = "Bob"
            "#,
        )
        .unwrap();

        let mut store = MemoryStore::new();
        assert_eq!(config.seed(&mut store).unwrap(), 2);
        assert_eq!(store.resolve("0005").unwrap(), PersonId::from_value(5));
        assert_eq!(store.resolve("0001").unwrap(), PersonId::from_value(1));
    }

    #[test]
    fn test_seed_rejects_bad_uuid() {
        let config = Config {
            settings: Settings::default(),
            contacts: vec![Contact {
                name: "Alice".to_string(),
                id: Some("0005".to_string()),
            }],
        };
        let mut store = MemoryStore::new();
        assert!(matches!(config.seed(&mut store), Err(CliError::Config(_))));
    }
}
