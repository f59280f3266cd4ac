// src/app.rs
use eframe::egui;
use std::time::Instant;
use tracing::debug;

use crate::config::MapperSettings;
use crate::state::AppState;

pub struct ProfileMapperApp {
    state: AppState,
}

impl ProfileMapperApp {
    pub fn new(settings: MapperSettings) -> Self {
        Self {
            state: AppState::new(&settings),
        }
    }
}

impl eframe::App for ProfileMapperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Settle any due map load before drawing this frame.
        if let Some(remaining) = self.state.selection.poll(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(egui::RichText::new("Profile Mapper").strong().size(28.0));
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available_size = ui.available_size();

            egui::Grid::new("profile_mapper_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    // Left panel - Profile List
                    ui.vertical(|ui| {
                        ui.set_width(available_size.x * 0.45);
                        ui.set_min_height(available_size.y);
                        crate::ui::profiles::show_profiles_view(ui, &mut self.state);
                    });

                    // Right panel - Profile Details & Map
                    ui.vertical(|ui| {
                        ui.set_width(available_size.x * 0.5);
                        crate::ui::detail::show_detail_view(ui, &self.state);
                    });
                });
        });

        // A click this frame may have started a new load.
        if let Some(remaining) = self.state.selection.poll(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl Drop for ProfileMapperApp {
    fn drop(&mut self) {
        debug!("shutting down profile mapper");
        self.state.selection.teardown();
    }
}
