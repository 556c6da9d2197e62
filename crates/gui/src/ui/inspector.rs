//! Inspector panel: one tab per parameter group, collapsible sections.
//!
//! Widgets read from and write to [`ControlModel`]; the session picks the
//! edits up on the next tick. Scroll offset, section state and keyboard
//! focus are mirrored into the model so undo can restore them.

use egui::Ui;

use crate::params::{tab_params, tab_sections, InspectorTab, ParamKind, ParamSpec, ParamValue};
use crate::state::controls::ControlModel;
use crate::state::presentation::{ControlSurface, FocusedControl, TextSelection};
use crate::state::AppState;
use crate::viewport::host::ViewportHost;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let active = state.controls.active_tab().unwrap_or_default();

    ui.horizontal_wrapped(|ui| {
        for tab in InspectorTab::all() {
            if ui
                .selectable_label(active == tab.key(), tab.label())
                .clicked()
            {
                state.controls.select_tab(tab.key());
            }
        }
    });
    ui.separator();

    let Some(tab) = InspectorTab::from_key(&active) else {
        return;
    };

    let focus_request = state.controls.take_focus_request();

    let mut area = egui::ScrollArea::vertical()
        .id_salt(("inspector_scroll", tab.key()))
        .auto_shrink([false, false]);
    if let Some(offset) = state.controls.take_scroll_request(tab.key()) {
        area = area.vertical_scroll_offset(offset);
    }
    let output = area.show(ui, |ui| {
        tab_header(ui, state, tab);
        for section in tab_sections(tab) {
            let open = state.controls.is_section_open(tab.key(), section);
            let response = egui::CollapsingHeader::new(section)
                .id_salt(("inspector_section", tab.key(), section))
                .open(Some(open))
                .show(ui, |ui| {
                    egui::Grid::new(("inspector_grid", tab.key(), section))
                        .num_columns(2)
                        .spacing([8.0, 4.0])
                        .show(ui, |ui| {
                            for spec in tab_params(tab).filter(|s| s.section == section) {
                                if !state.controls.is_visible(spec.key) {
                                    continue;
                                }
                                ui.label(spec.label);
                                param_widget(ui, &mut state.controls, spec, focus_request.as_ref());
                                ui.end_row();
                            }
                        });
                });
            if response.header_response.clicked() {
                state.controls.toggle_section(tab.key(), section);
            }
        }
    });
    state.controls.scroll_to(tab.key(), output.state.offset.y);
}

/// Tab-specific actions above the parameter sections
fn tab_header(ui: &mut Ui, state: &mut AppState, tab: InspectorTab) {
    match tab {
        InspectorTab::Model => {}
        InspectorTab::Material => {
            if state.session.project.scene.material().is_none() {
                ui.weak("The model has no material.");
            }
        }
        InspectorTab::Collar => {
            ui.horizontal(|ui| {
                let has_collar = state.session.project.scene.collar().is_some();
                if ui
                    .add_enabled(!has_collar, egui::Button::new("Add collar"))
                    .clicked()
                {
                    state.session.add_collar();
                }
                if ui
                    .add_enabled(has_collar, egui::Button::new("Remove collar"))
                    .clicked()
                {
                    state.session.remove_collar();
                }
            });
        }
        InspectorTab::Lighting => light_list(ui, state),
        InspectorTab::Paint => paint_layers(ui, state),
    }
    ui.add_space(4.0);
}

fn light_list(ui: &mut Ui, state: &mut AppState) {
    let names: Vec<String> = state
        .session
        .project
        .lights
        .iter()
        .map(|l| l.name.clone())
        .collect();
    let selected = state.session.project.selected_light_index;

    ui.horizontal(|ui| {
        ui.strong(format!("Lights ({})", names.len()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(names.len() > 1, egui::Button::new("−").small())
                .on_hover_text("Remove selected light")
                .clicked()
            {
                if let Err(e) = state.session.remove_light(selected) {
                    state.session.status = Some(e);
                }
            }
            if ui.small_button("+").on_hover_text("Add light").clicked() {
                state.session.add_light();
            }
        });
    });
    for (index, name) in names.iter().enumerate() {
        if ui.selectable_label(index == selected, name).clicked() && index != selected {
            if let Err(e) = state.session.select_light(index) {
                state.session.status = Some(e);
            }
        }
    }
}

fn paint_layers(ui: &mut Ui, state: &mut AppState) {
    let layers: Vec<String> = state
        .session
        .viewport
        .paint_layers()
        .iter()
        .map(|l| l.name.clone())
        .collect();
    let active = state.session.viewport.active_paint_layer_index();
    ui.horizontal(|ui| {
        ui.label("Layer");
        egui::ComboBox::from_id_salt("paint_layer")
            .selected_text(layers.get(active).map(String::as_str).unwrap_or("-"))
            .show_ui(ui, |ui| {
                for (index, name) in layers.iter().enumerate() {
                    if ui.selectable_label(index == active, name).clicked() {
                        state.session.set_active_paint_layer(index);
                    }
                }
            });
    });
}

fn param_widget(
    ui: &mut Ui,
    controls: &mut ControlModel,
    spec: &ParamSpec,
    focus_request: Option<&FocusedControl>,
) {
    let enabled = controls.is_enabled(spec.key);
    let current = controls.value(spec.key).cloned();
    let id = egui::Id::new(("param", spec.key));
    let wants_focus = focus_request.filter(|f| f.name == spec.key);

    let mut edited: Option<ParamValue> = None;
    let mut selection: Option<TextSelection> = None;

    let response = match spec.kind {
        ParamKind::Number { min, max } => {
            let mut v = current.and_then(|c| c.as_number().ok()).unwrap_or(0.0) as f32;
            let r = ui.add_enabled(enabled, egui::Slider::new(&mut v, min..=max));
            if r.changed() {
                edited = Some(ParamValue::Number(f64::from(v)));
            }
            r
        }
        ParamKind::Count { min, max } => {
            let mut v = current.and_then(|c| c.as_number().ok()).unwrap_or(0.0) as u32;
            let r = ui.add_enabled(
                enabled,
                egui::DragValue::new(&mut v).range(min..=max).speed(0.2),
            );
            if r.changed() {
                edited = Some(ParamValue::Number(f64::from(v)));
            }
            r
        }
        ParamKind::Toggle => {
            let mut v = current.and_then(|c| c.as_bool().ok()).unwrap_or(false);
            let r = ui.add_enabled(enabled, egui::Checkbox::without_text(&mut v));
            if r.changed() {
                edited = Some(ParamValue::Bool(v));
            }
            r
        }
        ParamKind::Choice(options) => {
            let text = current
                .as_ref()
                .and_then(|c| c.as_text().ok())
                .unwrap_or("")
                .to_string();
            let mut picked = None;
            let r = ui
                .add_enabled_ui(enabled, |ui| {
                    egui::ComboBox::from_id_salt(id)
                        .selected_text(&text)
                        .show_ui(ui, |ui| {
                            for option in options() {
                                if ui.selectable_label(option == text, option).clicked() {
                                    picked = Some(option);
                                }
                            }
                        })
                        .response
                })
                .inner;
            if let Some(option) = picked.filter(|o| *o != text) {
                edited = Some(ParamValue::Text(option.to_string()));
            }
            r
        }
        ParamKind::Color => {
            let mut rgb = current.and_then(|c| c.as_color().ok()).unwrap_or([0.0; 3]);
            let r = ui
                .add_enabled_ui(enabled, |ui| ui.color_edit_button_rgb(&mut rgb))
                .inner;
            if r.changed() {
                edited = Some(ParamValue::Color(rgb));
            }
            r
        }
        ParamKind::Text => {
            let mut text = current
                .as_ref()
                .and_then(|c| c.as_text().ok())
                .unwrap_or("")
                .to_string();
            if let Some(sel) = wants_focus.and_then(|f| f.selection) {
                restore_text_selection(ui.ctx(), id, sel);
            }
            let output = ui
                .add_enabled_ui(enabled, |ui| {
                    egui::TextEdit::singleline(&mut text)
                        .id(id)
                        .desired_width(160.0)
                        .show(ui)
                })
                .inner;
            if output.response.changed() {
                edited = Some(ParamValue::Text(text));
            }
            selection = output.cursor_range.map(|range| {
                let a = range.primary.ccursor.index;
                let b = range.secondary.ccursor.index;
                TextSelection {
                    start: a.min(b),
                    end: a.max(b),
                }
            });
            output.response
        }
    };

    if wants_focus.is_some() && enabled {
        response.request_focus();
    }
    if response.has_focus() {
        controls.focus(spec.key, selection);
    } else if response.lost_focus()
        && controls
            .focused_control()
            .is_some_and(|f| f.name == spec.key)
    {
        controls.clear_focus();
    }

    if let Some(value) = edited {
        controls.edit(spec.key, value);
    }
}

fn restore_text_selection(ctx: &egui::Context, id: egui::Id, selection: TextSelection) {
    let mut text_state = egui::text_edit::TextEditState::load(ctx, id).unwrap_or_default();
    let range = egui::text::CCursorRange::two(
        egui::text::CCursor::new(selection.start),
        egui::text::CCursor::new(selection.end),
    );
    text_state.cursor.set_char_range(Some(range));
    text_state.store(ctx, id);
}
