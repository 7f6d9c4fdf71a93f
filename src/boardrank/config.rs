use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAX_KEY_LEN: usize = 24;

/// Configuration for a board store, kept in `<store>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BoardConfig {
    /// Longest rank a create/move may produce before its group is respaced
    #[serde(default = "default_max_key_len")]
    pub max_key_len: usize,

    /// Respace the group automatically instead of only warning
    #[serde(default = "default_auto_rebalance")]
    pub auto_rebalance: bool,
}

fn default_max_key_len() -> usize {
    DEFAULT_MAX_KEY_LEN
}

fn default_auto_rebalance() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_key_len: DEFAULT_MAX_KEY_LEN,
            auto_rebalance: true,
        }
    }
}

impl BoardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BoardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Reads a setting by its config-file name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "max-key-len" => Ok(self.max_key_len.to_string()),
            "auto-rebalance" => Ok(self.auto_rebalance.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets a setting by its config-file name, parsing `value`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "max-key-len" => {
                let len: usize = value.parse().map_err(|_| {
                    BoardError::Api(format!("max-key-len must be a number, got {}", value))
                })?;
                if len == 0 {
                    return Err(BoardError::Api("max-key-len must be at least 1".into()));
                }
                self.max_key_len = len;
            }
            "auto-rebalance" => {
                self.auto_rebalance = match value {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => {
                        return Err(BoardError::Api(format!(
                            "auto-rebalance must be true or false, got {}",
                            value
                        )))
                    }
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("max-key-len", self.max_key_len.to_string()),
            ("auto-rebalance", self.auto_rebalance.to_string()),
        ]
    }
}

fn unknown_key(key: &str) -> BoardError {
    BoardError::Api(format!("Unknown config key: {}", key))
}
