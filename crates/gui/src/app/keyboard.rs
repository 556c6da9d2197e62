//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Text fields keep their own undo
    if ctx.wants_keyboard_input() {
        return;
    }

    let (undo, redo, escape) = ctx.input(|i| {
        let command = i.modifiers.command;
        let undo = command && !i.modifiers.shift && i.key_pressed(egui::Key::Z);
        let redo = (command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
            || (command && i.key_pressed(egui::Key::Y));
        (undo, redo, i.key_pressed(egui::Key::Escape))
    });

    // Ctrl+Z: undo
    if undo {
        state.undo();
    }
    // Ctrl+Shift+Z or Ctrl+Y: redo
    if redo {
        state.redo();
    }
    // Escape: clear scene selection
    if escape {
        state.session.selection.clear();
    }
}
