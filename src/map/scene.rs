// src/map/scene.rs
use eframe::egui::{self, Color32, Pos2, Rect, Shape, Stroke, Vec2};
use tracing::debug;
use super::projection::{MapPoint, CANVAS_HEIGHT, CANVAS_WIDTH};

pub const LAND_FILL: Color32 = Color32::from_rgb(0xA5, 0xD6, 0xA7);
pub const COAST_STROKE: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);
pub const COAST_WIDTH: f32 = 2.0;
pub const MARKER_RADIUS: f32 = 5.0;
const MARKER_HALO_ALPHA: u8 = 77; // ~30%

const COASTLINES: [&[(f32, f32)]; 3] = [
    &[(58.0, 27.0), (75.0, 45.0), (95.0, 45.0), (120.0, 60.0), (160.0, 70.0),
      (180.0, 50.0), (220.0, 50.0), (250.0, 70.0), (300.0, 80.0), (330.0, 60.0)],
    &[(170.0, 100.0), (200.0, 120.0), (220.0, 140.0), (260.0, 150.0), (300.0, 130.0)],
    &[(20.0, 70.0), (60.0, 90.0), (80.0, 120.0), (100.0, 130.0)],
];

/// Maps canvas units into a screen rect, scaled uniformly and centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    origin: Pos2,
    scale: f32,
}

impl CanvasTransform {
    pub fn fit(rect: Rect) -> Self {
        let scale = (rect.width() / CANVAS_WIDTH).min(rect.height() / CANVAS_HEIGHT);
        let used = Vec2::new(CANVAS_WIDTH * scale, CANVAS_HEIGHT * scale);
        let origin = rect.center() - used / 2.0;
        Self { origin, scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, point: MapPoint) -> Pos2 {
        self.origin + Vec2::new(point.x, point.y) * self.scale
    }

    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT) * self.scale)
    }
}

/// Everything drawn on the world map for one frame.
#[derive(Debug, Clone, Default)]
pub struct MapScene {
    pub marker: Option<MapPoint>,
}

impl MapScene {
    pub fn new(marker: Option<MapPoint>) -> Self {
        Self { marker }
    }

    pub fn shapes(&self, transform: &CanvasTransform) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(COASTLINES.len() + 3);

        shapes.push(Shape::rect_filled(transform.canvas_rect(), 0.0, LAND_FILL));

        let stroke = Stroke::new(COAST_WIDTH * transform.scale(), COAST_STROKE);
        for coastline in COASTLINES {
            let points = coastline
                .iter()
                .map(|&(x, y)| transform.to_screen(MapPoint { x, y }))
                .collect();
            shapes.push(Shape::line(points, stroke));
        }

        if let Some(marker) = self.marker {
            let center = transform.to_screen(marker);
            let radius = MARKER_RADIUS * transform.scale();
            shapes.push(Shape::circle_filled(center, radius, Color32::RED));
            shapes.push(Shape::circle_filled(
                center,
                radius * 2.0,
                Color32::from_rgba_unmultiplied(255, 0, 0, MARKER_HALO_ALPHA),
            ));
        }

        shapes
    }
}

pub fn paint(painter: &egui::Painter, rect: Rect, scene: &MapScene) {
    if let Some(marker) = scene.marker.filter(|m| !m.is_on_canvas()) {
        debug!(x = marker.x, y = marker.y, "marker lies outside the map canvas");
    }

    let transform = CanvasTransform::fit(rect);
    painter.extend(scene.shapes(&transform));
}
