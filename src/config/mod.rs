// src/config/mod.rs
pub mod profile;
pub mod settings;

// Re-export commonly used types
pub use profile::{Profile, all_profiles, find_profile};
pub use settings::MapperSettings;
