// src/config/settings.rs
use serde::{Serialize, Deserialize};
use std::time::Duration;

pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapperSettings {
    /// How long the map pretends to load after a selection.
    pub load_delay_ms: u64,
    pub window_size: [f32; 2],
}

impl MapperSettings {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

impl Default for MapperSettings {
    fn default() -> Self {
        Self {
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            window_size: [1024.0, 768.0],
        }
    }
}
