// src/ui/mod.rs
pub mod profiles;
pub mod detail;
