//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.curve.is_empty() {
                ui.label("Klicken, um den ersten Anker zu setzen");
            } else {
                ui.label(format!(
                    "Anker: {} | Segmente: {}",
                    state.anchor_count(),
                    state.segment_count()
                ));
            }

            ui.separator();

            ui.label(state.interaction.status_text());

            ui.separator();

            ui.label(format!("Toleranz: {:.0}", state.options.hit_tolerance));
        });
    });
}
