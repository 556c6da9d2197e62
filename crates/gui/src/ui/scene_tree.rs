//! Scene tree panel - model, its material and collar, and the lights

use egui::Ui;

use crate::params::InspectorTab;
use crate::state::history::SceneSelectionSnapshot;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Scene");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("+").on_hover_text("Add light").clicked() {
                state.session.add_light();
                state.controls.select_tab(InspectorTab::Lighting.key());
            }
            let count = state.session.project.lights.len();
            ui.weak(format!("({count} lights)"));
        });
    });
    ui.separator();

    let current = SceneSelectionSnapshot::capture(&state.session.selection, &state.session.project);
    let scene = &state.session.project.scene;

    // Collect rows first to avoid borrowing the project while selecting
    let mut rows: Vec<(usize, String, SceneSelectionSnapshot)> = Vec::new();
    rows.push((0, "Scene".to_string(), SceneSelectionSnapshot::SceneRoot));
    match scene.model() {
        Some(model) => {
            rows.push((1, format!("◯ {}", model.name), SceneSelectionSnapshot::Model));
            if let Some(material) = &model.material {
                rows.push((2, format!("◆ {}", material.name), SceneSelectionSnapshot::Material));
            }
            if let Some(collar) = &model.collar {
                rows.push((2, format!("◎ {}", collar.name), SceneSelectionSnapshot::Collar));
            }
        }
        None => rows.push((1, "(no model)".to_string(), SceneSelectionSnapshot::Unknown)),
    }
    for (index, light) in state.session.project.lights.iter().enumerate() {
        rows.push((
            1,
            format!("☀ {}", light.name),
            SceneSelectionSnapshot::Light { index },
        ));
    }

    let mut clicked = None;
    egui::ScrollArea::vertical()
        .id_salt("scene_tree_scroll")
        .max_height(260.0)
        .show(ui, |ui| {
            for (depth, label, target) in rows {
                ui.horizontal(|ui| {
                    ui.add_space(depth as f32 * 14.0);
                    let selectable = target != SceneSelectionSnapshot::Unknown;
                    let response = ui.add_enabled(
                        selectable,
                        egui::SelectableLabel::new(current == target, label),
                    );
                    if response.clicked() {
                        clicked = Some(target);
                    }
                });
            }
        });

    if let Some(target) = clicked {
        let tab = match target {
            SceneSelectionSnapshot::Model => Some(InspectorTab::Model),
            SceneSelectionSnapshot::Material => Some(InspectorTab::Material),
            SceneSelectionSnapshot::Collar => Some(InspectorTab::Collar),
            SceneSelectionSnapshot::Light { .. } => Some(InspectorTab::Lighting),
            SceneSelectionSnapshot::SceneRoot | SceneSelectionSnapshot::Unknown => None,
        };
        state.session.select(target);
        if let Some(tab) = tab {
            state.controls.select_tab(tab.key());
        }
    }
}
