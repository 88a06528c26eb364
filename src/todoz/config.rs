use crate::error::{Result, TodoError};
use crate::model::Filter;
use crate::store::backend::validate_key;
use crate::store::persistence::DEFAULT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for todoz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Key the todo list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Filter used by `list` when none is given
    #[serde(default)]
    pub default_filter: Filter,
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_filter: Filter::default(),
        }
    }
}

impl TodozConfig {
    pub const KEYS: [&'static str; 2] = ["storage-key", "default-filter"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        validate_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::Io)?;
        Ok(())
    }

    /// Value of a config key as shown to the user
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "default-filter" => Ok(self.default_filter.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a config key from user input, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                validate_key(value).map_err(|e| TodoError::Config(e.to_string()))?;
                self.storage_key = value.to_string();
            }
            "default-filter" => {
                self.default_filter = value.parse().map_err(TodoError::Config)?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> TodoError {
    TodoError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        TodozConfig::KEYS.join(", ")
    ))
}
