use egui::Ui;

use crate::state::AppState;
use crate::viewport::host::ViewportHost;

pub fn show(ui: &mut Ui, state: &AppState) {
    let session = &state.session;
    ui.horizontal(|ui| {
        match &session.status {
            Some(message) => {
                ui.label(message);
            }
            None => {
                ui.weak("Ready");
            }
        }

        // Right-aligned counters
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("KnobForge v{}", env!("CARGO_PKG_VERSION")));
            ui.separator();
            ui.weak(format!("Paint rev {}", session.viewport.paint_history_revision()));
            ui.separator();
            ui.weak(format!(
                "Undo {} / Redo {}",
                session.history().undo_len(),
                session.history().redo_len()
            ));
        });
    });
}
