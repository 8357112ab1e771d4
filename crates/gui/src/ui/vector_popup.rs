//! New-vector editor window
//!
//! Data lives in state/popup.rs; this only draws it and forwards the buttons.

use crate::i18n::t;
use crate::state::AppState;

const BASIS_KEYS: [&str; 3] = ["editor.basis_i", "editor.basis_j", "editor.basis_k"];

enum Action {
    Submit,
    Close,
}

pub fn show(ctx: &egui::Context, state: &mut AppState) {
    let Some(editor) = state.popup.editor_mut() else {
        return;
    };

    let mut action = None;
    egui::Window::new(t("editor.title"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.label(t("editor.prompt"));
            ui.add_space(6.0);

            egui::Grid::new("vector_fields_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    for (field, key) in editor.fields.iter_mut().zip(BASIS_KEYS) {
                        ui.label(t(key));
                        let response = ui.add(egui::TextEdit::singleline(field).desired_width(80.0));
                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            action = Some(Action::Submit);
                        }
                        ui.end_row();
                    }
                });

            if let Some(err) = editor.error {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::from_rgb(230, 80, 80), t(err.message_key()));
            }

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(t("editor.close")).clicked() {
                        action = Some(Action::Close);
                    }
                    if ui.button(t("editor.add")).clicked() {
                        action = Some(Action::Submit);
                    }
                });
            });
        });

    match action {
        Some(Action::Submit) => {
            state.submit_editor();
        }
        Some(Action::Close) => state.cancel_editor(),
        None => {}
    }
}
