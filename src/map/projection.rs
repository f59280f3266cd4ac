// src/map/projection.rs

pub const CANVAS_WIDTH: f32 = 360.0;
pub const CANVAS_HEIGHT: f32 = 180.0;

/// A point in map canvas units, origin top-left, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    pub fn is_on_canvas(&self) -> bool {
        (0.0..=CANVAS_WIDTH).contains(&self.x) && (0.0..=CANVAS_HEIGHT).contains(&self.y)
    }
}

/// Equirectangular projection onto the fixed canvas.
///
/// Inputs outside the valid latitude/longitude ranges are not clamped and land
/// off the canvas.
pub fn project(latitude: f64, longitude: f64) -> MapPoint {
    let x = ((longitude + 180.0) / 360.0) * CANVAS_WIDTH as f64;
    let y = ((90.0 - latitude) / 180.0) * CANVAS_HEIGHT as f64;
    MapPoint { x: x as f32, y: y as f32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 0.05, "expected {expected}, got {actual}");
    }

    #[test]
    fn corners_and_center() {
        assert_eq!(project(90.0, -180.0), MapPoint { x: 0.0, y: 0.0 });
        assert_eq!(project(-90.0, 180.0), MapPoint { x: 360.0, y: 180.0 });
        assert_eq!(project(0.0, 0.0), MapPoint { x: 180.0, y: 90.0 });
    }

    #[test]
    fn san_francisco() {
        let point = project(37.7749, -122.4194);
        assert_close(point.x, 57.58);
        assert_close(point.y, 52.23);
    }

    #[test]
    fn stays_on_canvas_for_valid_input() {
        for lat_step in 0..=36 {
            for lon_step in 0..=72 {
                let latitude = -90.0 + lat_step as f64 * 5.0;
                let longitude = -180.0 + lon_step as f64 * 5.0;
                let point = project(latitude, longitude);
                assert!(point.is_on_canvas(), "({latitude}, {longitude}) -> {point:?}");
                assert_eq!(point, project(latitude, longitude));
            }
        }
    }

    #[test]
    fn monotonic_in_both_axes() {
        assert!(project(0.0, 10.0).x > project(0.0, -10.0).x);
        assert!(project(10.0, 0.0).y < project(-10.0, 0.0).y);
    }

    #[test]
    fn out_of_range_is_not_clamped() {
        let point = project(120.0, 200.0);
        assert!(!point.is_on_canvas());
        assert_close(point.x, 380.0);
        assert_close(point.y, -30.0);
    }
}
