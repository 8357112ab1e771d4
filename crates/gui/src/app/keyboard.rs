//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Escape closes the editor even while one of its fields has focus
    if state.popup.is_open() {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            state.cancel_editor();
        }
        return;
    }

    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (escape, delete, add) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.modifiers.command && i.key_pressed(egui::Key::N),
        )
    });

    // Escape: drop the selection
    if escape {
        state.clear_selection();
    }
    // Delete: remove the primary selection
    if delete {
        state.delete_selected();
    }
    // Ctrl+N: new vector
    if add {
        state.open_editor();
    }
}
