// src/ui/profiles.rs
use eframe::egui;
use crate::config::all_profiles;
use crate::state::AppState;

pub fn show_profiles_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Profiles");
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .id_source("profiles_list_scroll")
        .show(ui, |ui| {
            for profile in all_profiles() {
                let is_selected = state.selection.selected() == Some(profile.id);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());

                    let response = ui.selectable_label(
                        is_selected,
                        egui::RichText::new(profile.name).strong().size(16.0),
                    );
                    if response.clicked() {
                        state.select_profile(profile.id);
                    }

                    ui.label(egui::RichText::new(profile.description).weak());
                });
                ui.add_space(4.0);
            }
        });
}
