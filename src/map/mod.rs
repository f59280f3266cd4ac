// src/map/mod.rs
pub mod projection;
pub mod scene;

pub use projection::{project, MapPoint};
pub use scene::MapScene;
