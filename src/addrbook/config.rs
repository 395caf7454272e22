use crate::error::{AddressBookError, Result};
use crate::logger::parse_level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";
const DEFAULT_LOG_FILE: &str = "addressbook.log";
const DEFAULT_LOG_LEVEL: &str = "info";

pub const KEYS: [&str; 4] = ["data-file", "log-file", "log-level", "default-book"];

/// Configuration for addrbook, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBookConfig {
    /// The JSON file holding every book, relative to the home directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Where audit events are appended
    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Book used by contact commands when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_book: Option<String>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            default_book: None,
        }
    }
}

impl AddressBookConfig {
    /// Load config from the given directory, or return defaults if not found.
    /// An unreadable or malformed file is a `Config` error naming the file.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let invalid = |reason: String| {
            AddressBookError::Config(format!("{}: {}", config_path.display(), reason))
        };
        let content = fs::read_to_string(&config_path).map_err(|e| invalid(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "log-file" => Some(self.log_file.clone()),
            "log-level" => Some(self.log_level.clone()),
            "default-book" => Some(self.default_book.clone().unwrap_or_default()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "data-file" | "log-file" if value.is_empty() => Err(AddressBookError::Config(
                format!("{} cannot be empty", key),
            )),
            "data-file" => {
                self.data_file = value.to_string();
                Ok(())
            }
            "log-file" => {
                self.log_file = value.to_string();
                Ok(())
            }
            "log-level" => {
                parse_level(value)?;
                self.log_level = value.to_lowercase();
                Ok(())
            }
            "default-book" => {
                self.default_book = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
                Ok(())
            }
            _ => Err(AddressBookError::Config(format!(
                "Unknown config key: {}",
                key
            ))),
        }
    }

    pub fn data_path(&self, home: &Path) -> PathBuf {
        resolve(home, &self.data_file)
    }

    pub fn log_path(&self, home: &Path) -> PathBuf {
        resolve(home, &self.log_file)
    }
}

fn resolve(home: &Path, file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        home.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AddressBookConfig::default();
        assert_eq!(config.data_file, "addressbook.json");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_book, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = AddressBookConfig::load(dir.path()).unwrap();
        assert_eq!(config, AddressBookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AddressBookConfig::default();
        config.set("default-book", "Work").unwrap();
        config.set("log-level", "DEBUG").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = AddressBookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_book.as_deref(), Some("Work"));
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"data_file":"books.json"}"#).unwrap();

        let config = AddressBookConfig::load(dir.path()).unwrap();
        assert_eq!(config.data_file, "books.json");
        assert_eq!(config.log_file, "addressbook.log");
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"data_file":"books.json",}"#).unwrap();

        match AddressBookConfig::load(dir.path()) {
            Err(AddressBookError::Config(msg)) => assert!(msg.contains("config.json")),
            other => panic!("expected a config error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_key_and_level() {
        let mut config = AddressBookConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("log-level", "chatty").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert_eq!(config, AddressBookConfig::default());
    }

    #[test]
    fn test_clearing_default_book() {
        let mut config = AddressBookConfig::default();
        config.set("default-book", "Work").unwrap();
        config.set("default-book", "").unwrap();
        assert_eq!(config.default_book, None);
    }

    #[test]
    fn test_paths_resolve_against_home() {
        let config = AddressBookConfig::default();
        let home = Path::new("/tmp/addrbook-home");
        assert_eq!(config.data_path(home), home.join("addressbook.json"));

        let mut absolute = AddressBookConfig::default();
        absolute.set("data-file", "/var/books.json").unwrap();
        assert_eq!(absolute.data_path(home), PathBuf::from("/var/books.json"));
    }
}
