use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::ConfigError;

/// Where serialized configuration text lives. `Ok(None)` means nothing has
/// been stored yet.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Read(format!("{}: {}", self.file_path.display(), err))),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content)
            .map_err(|e| ConfigError::Write(format!("{}: {}", self.file_path.display(), e)))
    }
}

#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }
}

impl ConfigContentProvider for MemoryContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        let content = self.content.lock().unwrap_or_else(|e| e.into_inner());
        Ok(content.clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        let mut current = self.content.lock().unwrap_or_else(|e| e.into_inner());
        *current = Some(content.to_string());
        Ok(())
    }
}
