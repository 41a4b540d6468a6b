use std::path::Path;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::error::ConfigError;

/// Durable home of the best score. The engine never calls this directly: the
/// host loads the value before construction and saves from the engine's
/// high-score callback.
pub trait HighScoreStore: Send + Sync {
    fn load(&self) -> Result<u32, ConfigError>;
    fn save(&self, high_score: u32) -> Result<(), ConfigError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

impl Validate for HighScoreRecord {
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

pub struct FileHighScoreStore {
    manager: ConfigManager<FileContentConfigProvider, HighScoreRecord, YamlConfigSerializer>,
}

impl FileHighScoreStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(file_path),
        }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<u32, ConfigError> {
        Ok(self.manager.get_config()?.high_score)
    }

    /// Never lowers the stored value.
    fn save(&self, high_score: u32) -> Result<(), ConfigError> {
        if high_score <= self.load()? {
            return Ok(());
        }
        self.manager.set_config(&HighScoreRecord { high_score })
    }
}

#[derive(Default)]
pub struct MemoryHighScoreStore {
    high_score: Mutex<u32>,
}

impl MemoryHighScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score: Mutex::new(high_score),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u32, ConfigError> {
        Ok(*self.high_score.lock().unwrap_or_else(|e| e.into_inner()))
    }

    fn save(&self, high_score: u32) -> Result<(), ConfigError> {
        let mut current = self.high_score.lock().unwrap_or_else(|e| e.into_inner());
        *current = (*current).max(high_score);
        Ok(())
    }
}
