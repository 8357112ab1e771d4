use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let has_plane = state.active_plane.is_some();
        if ui
            .add_enabled(has_plane, egui::Button::new(format!("+ {}", t("nav.add"))))
            .clicked()
        {
            state.open_editor();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(t("nav.settings")).clicked() {
                state.show_settings_window = !state.show_settings_window;
            }
        });
    });
}
