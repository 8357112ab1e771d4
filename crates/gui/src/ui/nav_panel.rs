use egui::Ui;
use shared::Plane;

use crate::i18n::t;
use crate::state::AppState;

fn plane_label(plane: Plane) -> &'static str {
    match plane {
        Plane::Planar => t("nav.planar"),
        Plane::Spatial => t("nav.spatial"),
    }
}

/// Plane list in the left panel
pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("app.title"));
    ui.separator();
    for &plane in Plane::all() {
        let selected = state.active_plane == Some(plane);
        if ui.selectable_label(selected, plane_label(plane)).clicked() && !selected {
            state.select_plane(plane);
        }
    }
}
