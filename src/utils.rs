// src/utils.rs

/// Formats a latitude or longitude with four decimal places.
pub fn format_coordinate(value: f64) -> String {
    format!("{:.4}", value)
}
