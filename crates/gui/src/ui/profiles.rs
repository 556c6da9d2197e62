//! Reference profile panel: save, apply and manage named looks

use std::time::Instant;

use egui::Ui;

use crate::state::profile::{normalize_profile_name, ProfileAction, ProfileError};
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Reference profiles");
    ui.add_space(2.0);

    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.profile_name_input)
            .hint_text("Profile name")
            .desired_width(ui.available_width() - 50.0);
        ui.add(input);
        if ui.button("Save").clicked() {
            let name = state.profile_name_input.clone();
            if report(state.session.save_profile(&name)) {
                state.selected_profile = Some(name.trim().to_string());
                state.profile_name_input.clear();
            }
        }
    });

    let names = state.session.profiles().names();
    if names.is_empty() {
        ui.add_space(6.0);
        ui.weak("No saved profiles");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("profile_list_scroll")
        .max_height(180.0)
        .show(ui, |ui| {
            for name in &names {
                let selected = state
                    .selected_profile
                    .as_deref()
                    .is_some_and(|s| normalize_profile_name(s) == normalize_profile_name(name));
                let response = ui.selectable_label(selected, name);
                if response.clicked() {
                    state.selected_profile = Some(name.clone());
                }
                if response.double_clicked() {
                    apply(state, name);
                }
            }
        });

    let Some(selected) = state.selected_profile.clone() else {
        return;
    };
    if state.session.profiles().find(&selected).is_none() {
        state.selected_profile = None;
        return;
    }

    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        if ui.button("Apply").clicked() {
            apply(state, &selected);
        }
        if ui
            .button("Overwrite")
            .on_hover_text("Replace with the current look (press twice)")
            .clicked()
        {
            report(state.session.overwrite_profile(&selected, Instant::now()));
        }
        if ui
            .button("Delete")
            .on_hover_text("Delete this profile (press twice)")
            .clicked()
        {
            let result = state.session.delete_profile(&selected, Instant::now());
            if matches!(result, Ok(ProfileAction::Deleted(_))) {
                state.selected_profile = None;
            }
            report(result);
        }
    });

    let target = state.profile_name_input.trim().to_string();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!target.is_empty(), egui::Button::new("Rename"))
            .on_hover_text("Rename to the name typed above")
            .clicked()
            && report(state.session.rename_profile(&selected, &target))
        {
            state.selected_profile = Some(target.clone());
            state.profile_name_input.clear();
        }
        if ui
            .add_enabled(!target.is_empty(), egui::Button::new("Duplicate"))
            .on_hover_text("Copy under the name typed above")
            .clicked()
            && report(state.session.duplicate_profile(&selected, &target))
        {
            state.selected_profile = Some(target.clone());
            state.profile_name_input.clear();
        }
    });

    if let Some((action, name)) = state.session.profiles().pending_confirmation() {
        ui.colored_label(
            egui::Color32::from_rgb(230, 170, 80),
            format!("Press {} again to confirm '{name}'", action.verb()),
        );
    }
}

fn apply(state: &mut AppState, name: &str) {
    if let Err(e) = state.session.apply_profile_in(&mut state.controls, name) {
        tracing::warn!("{e}");
    }
}

/// Log a failed profile operation; the session already carries the status.
/// Returns true when the library changed.
fn report(result: Result<ProfileAction, ProfileError>) -> bool {
    match result {
        Ok(action) => action.is_mutation(),
        Err(e) => {
            tracing::debug!("Profile operation rejected: {e}");
            false
        }
    }
}
