//! Main application module

mod keyboard;
mod menus;
mod styles;

use std::path::Path;

use eframe::egui;

use crate::state::session::SessionFile;
use crate::state::AppState;
use crate::ui::{inspector, profiles, scene_tree, status_bar};
use crate::viewport::PreviewPanel;

/// Main application
pub struct KnobApp {
    state: AppState,
    preview: PreviewPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl KnobApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial: Option<SessionFile>) -> Self {
        let mut state = AppState::default();

        if let Some(file) = initial {
            if let Err(e) = state.session.import_state(file) {
                tracing::error!("Failed to load project: {e}");
                state.session.status = Some(e);
            }
            state.session.refresh_ui(&mut state.controls);
        }

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            preview: PreviewPanel::new(),
            last_font_size,
        }
    }
}

impl eframe::App for KnobApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state);
                menus::collar_menu(ui, &mut self.state);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: Scene tree + profiles ────────────────
        if self.state.panels.scene_tree || self.state.panels.profiles {
            egui::SidePanel::left("scene_tree")
                .default_width(230.0)
                .width_range(160.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    if self.state.panels.scene_tree {
                        scene_tree::show(ui, &mut self.state);
                    }
                    if self.state.panels.profiles {
                        ui.add_space(6.0);
                        ui.separator();
                        profiles::show(ui, &mut self.state);
                    }
                });
        }

        // ── Right panel: Inspector ───────────────────────────
        if self.state.panels.inspector {
            egui::SidePanel::right("inspector")
                .default_width(320.0)
                .width_range(240.0..=520.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    inspector::show(ui, &mut self.state);
                });
        }

        // ── Central panel: knob preview ──────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.preview.show(ui, &mut self.state);
            });

        // Edits pushed by the panels this frame, pending focus, control refresh
        self.state.tick();
    }
}

/// Read a saved project file
pub fn read_session_file(path: &Path) -> Result<SessionFile, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Write the session as a project file
pub fn write_session_file(path: &Path, file: &SessionFile) -> Result<(), String> {
    let json = serde_json::to_string_pretty(file)
        .map_err(|e| format!("Failed to serialize project: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
