//! Application menu bar and settings window

use eframe::egui;
use shared::{CollarPreset, KnobProject};

use super::{read_session_file, write_session_file};
use crate::state::history::MAX_UNDO_SNAPSHOTS;
use crate::state::{AppSettings, AppState};
use crate::viewport::host::ViewportHost;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("File", |ui| {
        if ui.button("New").clicked() {
            state.session.replace_project(KnobProject::default());
            state.session.status = Some("New project".to_string());
            ui.close_menu();
        }
        if ui.button("Open…").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Open knob project")
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                let result = read_session_file(&path)
                    .and_then(|file| state.session.import_state(file));
                match result {
                    Ok(()) => {
                        tracing::info!("Loaded project from {}", path.display());
                        state.session.status = Some(format!("Opened {}", path.display()));
                    }
                    Err(e) => {
                        tracing::error!("{e}");
                        state.session.status = Some(e);
                    }
                }
            }
        }
        if ui.button("Save As…").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Save knob project")
                .add_filter("JSON", &["json"])
                .set_file_name("knob.json")
                .save_file()
            {
                match write_session_file(&path, &state.session.export_state()) {
                    Ok(()) => {
                        tracing::info!("Saved project to {}", path.display());
                        state.session.status = Some(format!("Saved {}", path.display()));
                    }
                    Err(e) => {
                        tracing::error!("{e}");
                        state.session.status = Some(e);
                    }
                }
            }
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Edit", |ui| {
        let can_undo = state.session.can_undo();
        let can_redo = state.session.can_redo();
        if ui
            .add_enabled(can_undo, egui::Button::new("Undo").shortcut_text("Ctrl+Z"))
            .clicked()
        {
            state.undo();
            ui.close_menu();
        }
        if ui
            .add_enabled(can_redo, egui::Button::new("Redo").shortcut_text("Ctrl+Shift+Z"))
            .clicked()
        {
            state.redo();
            ui.close_menu();
        }
    });
}

/// Show the view menu (panel toggles)
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("View", |ui| {
        ui.checkbox(&mut state.panels.scene_tree, "Scene tree");
        ui.checkbox(&mut state.panels.inspector, "Inspector");
        ui.checkbox(&mut state.panels.profiles, "Reference profiles");
        ui.separator();
        ui.checkbox(&mut state.settings.viewport.show_overlay, "Preview overlay");
    });
}

/// Show the collar menu
pub fn collar_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Collar", |ui| {
        let has_collar = state.session.project.scene.collar().is_some();
        if ui
            .add_enabled(!has_collar, egui::Button::new("Add collar"))
            .clicked()
        {
            state.session.add_collar();
            ui.close_menu();
        }
        if ui
            .add_enabled(has_collar, egui::Button::new("Remove collar"))
            .clicked()
        {
            state.session.remove_collar();
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Import mesh…").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Import collar mesh")
                .add_filter("Mesh", &["obj", "stl", "glb", "gltf"])
                .pick_file()
            {
                import_collar_mesh(state, &path.display().to_string());
            }
        }
    });
}

/// Point the collar at an imported mesh, creating the collar if needed.
/// Recorded as one undo step.
fn import_collar_mesh(state: &mut AppState, path: &str) {
    let session = &mut state.session;
    let collar = session.project.scene.ensure_collar();
    collar.params.enabled = true;
    collar.params.preset = CollarPreset::ImportedMesh;
    collar.params.imported_mesh_path = path.to_string();
    session.viewport.invalidate_gpu();
    session.notify_project_state_changed();
    tracing::info!("Collar mesh set to {path}");
    session.status = Some(format!("Imported collar mesh {path}"));
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Settings", |ui| {
        if ui.button("Preferences…").clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_history_settings(ui, state);
                show_viewport_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn show_history_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("History");
    ui.horizontal(|ui| {
        ui.label("Undo steps:");
        ui.add(
            egui::DragValue::new(&mut state.settings.history.max_undo_snapshots)
                .speed(1)
                .range(1..=512),
        );
        if state.settings.history.max_undo_snapshots != MAX_UNDO_SNAPSHOTS {
            ui.weak(format!("(default {MAX_UNDO_SNAPSHOTS})"));
        }
    });
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Preview");
    ui.horizontal(|ui| {
        ui.label("Background:");
        ui.color_edit_button_srgb(&mut state.settings.viewport.background_color);
    });
    ui.checkbox(
        &mut state.settings.viewport.show_overlay,
        "Show indicator and grip overlay",
    );
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Interface");
    ui.horizontal(|ui| {
        ui.label("Font size:");
        ui.add(egui::Slider::new(&mut state.settings.ui.font_size, 10.0..=24.0).step_by(1.0));
    });
    if let Some(path) = state.session.profile_store().path() {
        ui.horizontal(|ui| {
            ui.label("Profile store:");
            ui.weak(path.display().to_string());
        });
    }
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Apply").clicked() {
            state.apply_settings();
            tracing::info!("Settings saved");
        }
        if ui.button("Reset").clicked() {
            state.settings = AppSettings::default();
        }
        if ui.button("Close").clicked() {
            state.apply_settings();
            state.show_settings_window = false;
        }
    });
}
