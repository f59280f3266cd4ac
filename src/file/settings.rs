// src/file/settings.rs
use super::FileHandler;
use crate::config::MapperSettings;
use std::path::Path;
use std::fs;
use anyhow::{Result, Context};

#[derive(Debug)]
pub struct SettingsFileHandler;

impl SettingsFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<MapperSettings> for SettingsFileHandler {
    fn load(&self, path: &Path) -> Result<MapperSettings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        ron::from_str(&content).context("Failed to parse settings file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(load_delay_ms: 250)").unwrap();

        let settings = SettingsFileHandler::new().load(&path).unwrap();
        assert_eq!(settings.load_delay_ms, 250);
        assert_eq!(settings.window_size, MapperSettings::default().window_size);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(load_delay_ms: \"soon\")").unwrap();

        assert!(SettingsFileHandler::new().load(&path).is_err());
    }
}
