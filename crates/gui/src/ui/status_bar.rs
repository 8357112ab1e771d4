use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        match state.active_session() {
            Some(session) => {
                ui.weak(format!("{}: {}", t("status.vectors"), session.store.len()));
            }
            None => {
                ui.weak(t("status.ready"));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("vecviz v", env!("CARGO_PKG_VERSION")));
        });
    });
}
