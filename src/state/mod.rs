// src/state/mod.rs
use std::time::Instant;

use crate::config::MapperSettings;

pub mod selection;

pub use selection::SelectionState;

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub selection: SelectionState,
}

impl AppState {
    pub fn new(settings: &MapperSettings) -> Self {
        Self {
            selection: SelectionState::new(settings.load_delay()),
        }
    }

    pub fn select_profile(&mut self, profile_id: u32) {
        self.selection.select(profile_id, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_starts_loading() {
        let mut state = AppState::new(&MapperSettings::default());
        assert_eq!(state.selection.selected(), None);

        state.select_profile(9);
        assert_eq!(state.selection.selected(), Some(9));
        assert!(!state.selection.is_loaded());
    }
}
