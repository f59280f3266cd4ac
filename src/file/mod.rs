// src/file/mod.rs
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::config::MapperSettings;

pub mod settings;

pub const SETTINGS_ENV_VAR: &str = "PROFILE_MAPPER_SETTINGS";

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
}

#[derive(Debug)]
pub struct FileManager {
    settings_path: Option<PathBuf>,
    settings_handler: settings::SettingsFileHandler,
}

impl FileManager {
    pub fn new() -> Self {
        let settings_path = env::var_os(SETTINGS_ENV_VAR)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("profile-mapper").join("settings.ron")));
        Self::with_settings_path(settings_path)
    }

    pub fn with_settings_path(settings_path: Option<PathBuf>) -> Self {
        Self {
            settings_path,
            settings_handler: settings::SettingsFileHandler::new(),
        }
    }

    /// Reads the settings file if there is one. A missing or unreadable file
    /// falls back to defaults.
    pub fn load_settings(&self) -> MapperSettings {
        let Some(path) = &self.settings_path else {
            return MapperSettings::default();
        };

        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return MapperSettings::default();
        }

        match self.settings_handler.load(path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                warn!("{:#}; using default settings", e);
                MapperSettings::default()
            }
        }
    }
}
