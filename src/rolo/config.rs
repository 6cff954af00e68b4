use crate::error::{Result, RoloError};
use crate::flash::DEFAULT_TTL_SECS;
use crate::store::{check_key, CONTACTS_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rolo, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// Storage key the collection lives under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Seconds a status message stays visible
    #[serde(default = "default_message_ttl_secs")]
    pub message_ttl_secs: u64,
}

fn default_storage_key() -> String {
    CONTACTS_KEY.to_string()
}

fn default_message_ttl_secs() -> u64 {
    DEFAULT_TTL_SECS
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            message_ttl_secs: default_message_ttl_secs(),
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RoloError::Io)?;
        let config: RoloConfig =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        check_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RoloError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RoloError::Serialization)?;
        fs::write(config_path, content).map_err(RoloError::Io)?;
        Ok(())
    }

    pub const KEYS: [&'static str; 2] = ["storage-key", "message-ttl"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "message-ttl" => Some(self.message_ttl_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => self.set_storage_key(value),
            "message-ttl" => self.set_message_ttl(value),
            _ => Err(RoloError::Api(format!("Unknown config key: {}", key))),
        }
    }

    pub fn message_ttl(&self) -> chrono::Duration {
        i64::try_from(self.message_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    /// Set the storage key. Keys become file names; see [`check_key`].
    pub fn set_storage_key(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        check_key(key)?;
        self.storage_key = key.to_string();
        Ok(())
    }

    pub fn set_message_ttl(&mut self, value: &str) -> Result<()> {
        self.message_ttl_secs = value
            .trim()
            .parse()
            .map_err(|_| RoloError::Api(format!("Invalid number of seconds: {}", value)))?;
        Ok(())
    }
}
