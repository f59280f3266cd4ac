// src/ui/detail.rs
use eframe::egui;
use crate::config::find_profile;
use crate::map::{self, project, MapPoint, MapScene};
use crate::state::{AppState, SelectionState};
use crate::utils::format_coordinate;

pub const PLACEHOLDER: &str = "Select a profile to see its location";
const MAP_HEIGHT: f32 = 256.0;
const SPINNER_SIZE: f32 = 48.0;

/// What the map pane shows for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPane {
    Placeholder,
    Profile(ProfileDetail),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetail {
    pub name: &'static str,
    pub role: &'static str,
    pub latitude: String,
    pub longitude: String,
    /// Projected marker position; present once the map has loaded.
    pub marker: Option<MapPoint>,
    pub loading: bool,
}

pub fn detail_pane(selection: &SelectionState) -> DetailPane {
    let Some(profile) = selection.selected().and_then(find_profile) else {
        return DetailPane::Placeholder;
    };

    let loading = !selection.is_loaded();
    DetailPane::Profile(ProfileDetail {
        name: profile.name,
        role: profile.description,
        latitude: format_coordinate(profile.latitude),
        longitude: format_coordinate(profile.longitude),
        marker: (!loading).then(|| project(profile.latitude, profile.longitude)),
        loading,
    })
}

pub fn show_detail_view(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Map");
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());

        match detail_pane(&state.selection) {
            DetailPane::Placeholder => {
                ui.label(egui::RichText::new(PLACEHOLDER).italics().weak());
            }
            DetailPane::Profile(detail) => show_profile_detail(ui, &detail),
        }
    });
}

fn show_profile_detail(ui: &mut egui::Ui, detail: &ProfileDetail) {
    ui.label(egui::RichText::new(detail.name).strong().size(20.0));
    labelled(ui, "Role:", detail.role);
    labelled(ui, "Latitude:", &detail.latitude);
    labelled(ui, "Longitude:", &detail.longitude);
    ui.add_space(16.0);

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), MAP_HEIGHT),
        egui::Sense::hover(),
    );

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        map::scene::paint(&painter, rect, &MapScene::new(detail.marker));

        if detail.loading {
            painter.rect_filled(rect, 0.0, egui::Color32::from_rgba_unmultiplied(243, 244, 246, 128));
            let spinner_rect = egui::Rect::from_center_size(rect.center(), egui::Vec2::splat(SPINNER_SIZE));
            ui.put(spinner_rect, egui::Spinner::new().size(SPINNER_SIZE));
        }
    }
}

fn labelled(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.label(value);
    });
}
