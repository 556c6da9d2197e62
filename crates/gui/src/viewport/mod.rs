//! Top-down knob preview with paint input

pub use knob_gui_lib::viewport::{host, preview};

use egui::{Color32, Pos2, Rect, Stroke, Ui};
use shared::PaintChannel;

use crate::state::AppState;

/// Texture resolution the brush size is expressed in
const PAINT_TEXTURE_SIZE: f32 = 1024.0;
/// Light coordinates covered by the preview half-extent
const LIGHT_EXTENT: f32 = 2000.0;
/// Minimum pointer travel between recorded dabs, in texture space
const DAB_SPACING: f32 = 0.02;

/// Central preview panel
pub struct PreviewPanel {
    last_dab: Option<[f32; 2]>,
}

impl PreviewPanel {
    pub fn new() -> Self {
        Self { last_dab: None }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());
        let painter = ui.painter_at(rect);
        let [r, g, b] = state.settings.viewport.background_color;
        painter.rect_filled(rect, 0.0, Color32::from_rgb(r, g, b));

        let project = &state.session.project;
        let Some(model) = project.scene.model() else {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No model",
                egui::FontId::proportional(16.0),
                Color32::GRAY,
            );
            return;
        };

        let center = rect.center();
        let half = rect.width().min(rect.height()) * 0.5;
        // Largest knob (radius 600) fills most of the panel
        let knob_px = (model.params.radius / 600.0 * half * 0.8).max(8.0);

        // Collar ring
        if let Some(collar) = project.scene.collar().filter(|c| c.params.enabled) {
            let gap = knob_px * (1.0 + collar.params.gap_to_knob_ratio);
            let width = knob_px * collar.params.body_thickness_ratio.max(0.02);
            painter.circle_stroke(
                center,
                gap + width * 0.5,
                Stroke::new(width, to_color(collar.params.base_color)),
            );
        }

        // Body
        let base = project
            .scene
            .material()
            .map(|m| m.params.base_color)
            .unwrap_or([0.6, 0.6, 0.6]);
        painter.circle_filled(center, knob_px, to_color(base));
        painter.circle_filled(
            center,
            knob_px * model.params.top_radius_scale.clamp(0.1, 1.0),
            to_color(base).gamma_multiply(1.15),
        );

        if state.settings.viewport.show_overlay {
            // Grip ticks around the rim
            let ticks = (model.params.grip_density.round() as usize).clamp(8, 120);
            let depth = knob_px * 0.06;
            let tick_color = Color32::from_black_alpha(90);
            for i in 0..ticks {
                let angle = i as f32 / ticks as f32 * std::f32::consts::TAU;
                let dir = egui::vec2(angle.cos(), angle.sin());
                painter.line_segment(
                    [center + dir * (knob_px - depth), center + dir * knob_px],
                    Stroke::new(1.0, tick_color),
                );
            }

            // Indicator at twelve o'clock
            if model.params.indicator_enabled {
                let outer = knob_px * (1.0 - model.params.indicator_position * 0.5);
                let inner = outer - knob_px * model.params.indicator_length;
                let width = (knob_px * model.params.indicator_width).max(1.5);
                painter.line_segment(
                    [
                        Pos2::new(center.x, center.y - inner.max(0.0)),
                        Pos2::new(center.x, center.y - outer),
                    ],
                    Stroke::new(width, Color32::from_rgb(240, 236, 228)),
                );
            }
        }

        // Applied paint strokes
        for stroke in state.session.viewport.applied_strokes() {
            let pos = from_texture(center, knob_px, stroke.position);
            let radius = stroke.radius / PAINT_TEXTURE_SIZE * knob_px * 2.0;
            painter.circle_filled(pos, radius.max(1.0), channel_color(stroke.channel));
        }

        // Lights, selected one outlined
        for (index, light) in project.lights.iter().enumerate() {
            let pos = Pos2::new(
                center.x + light.x / LIGHT_EXTENT * half,
                center.y - light.y / LIGHT_EXTENT * half,
            );
            let [lr, lg, lb, _] = light.color;
            painter.circle_filled(pos, 6.0, Color32::from_rgb(lr, lg, lb));
            if index == project.selected_light_index {
                painter.circle_stroke(pos, 9.0, Stroke::new(1.5, Color32::WHITE));
            }
        }

        self.handle_paint(&response, rect, center, knob_px, state);
    }

    fn handle_paint(
        &mut self,
        response: &egui::Response,
        rect: Rect,
        center: Pos2,
        knob_px: f32,
        state: &mut AppState,
    ) {
        if response.drag_stopped() {
            self.last_dab = None;
        }
        if !response.dragged_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pointer) = response.interact_pointer_pos().filter(|p| rect.contains(*p)) else {
            return;
        };
        if pointer.distance(center) > knob_px {
            return;
        }
        let position = to_texture(center, knob_px, pointer);
        if far_from(self.last_dab, position) {
            let radius = state.session.project.brush.size;
            state.session.paint_stroke(position, radius);
            self.last_dab = Some(position);
        }
    }
}

fn far_from(last: Option<[f32; 2]>, position: [f32; 2]) -> bool {
    last.map_or(true, |[x, y]| {
        let (dx, dy) = (position[0] - x, position[1] - y);
        (dx * dx + dy * dy).sqrt() >= DAB_SPACING
    })
}

fn to_texture(center: Pos2, knob_px: f32, pos: Pos2) -> [f32; 2] {
    [
        ((pos.x - center.x) / knob_px + 1.0) * 0.5,
        ((pos.y - center.y) / knob_px + 1.0) * 0.5,
    ]
}

fn from_texture(center: Pos2, knob_px: f32, uv: [f32; 2]) -> Pos2 {
    Pos2::new(
        center.x + (uv[0] * 2.0 - 1.0) * knob_px,
        center.y + (uv[1] * 2.0 - 1.0) * knob_px,
    )
}

fn to_color(rgb: [f32; 3]) -> Color32 {
    let [r, g, b] = rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgb(r, g, b)
}

fn channel_color(channel: PaintChannel) -> Color32 {
    match channel {
        PaintChannel::Rust => Color32::from_rgba_unmultiplied(150, 72, 30, 160),
        PaintChannel::Wear => Color32::from_rgba_unmultiplied(220, 220, 210, 140),
        PaintChannel::Gunk => Color32::from_rgba_unmultiplied(50, 45, 30, 170),
        PaintChannel::Scratch => Color32::from_rgba_unmultiplied(235, 230, 215, 180),
        PaintChannel::Erase => Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        PaintChannel::Color => Color32::from_rgba_unmultiplied(200, 200, 200, 120),
    }
}
