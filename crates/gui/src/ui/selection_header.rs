//! Header above the canvas: selection description and delete button

use egui::Ui;

use crate::format::format_components;
use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.label(egui::RichText::new(state.describe_selection()).strong());

    let secondary = state.active_session().and_then(|s| {
        let id = s.selection.secondary()?;
        s.store.find(id).map(|v| format_components(&v.components))
    });
    match secondary {
        Some(text) => {
            ui.colored_label(
                egui::Color32::from_rgb(230, 50, 50),
                format!("{}: {text}", t("selection.compare")),
            );
        }
        None => {
            ui.weak(t("selection.hint"));
        }
    }

    let has_primary = state
        .active_session()
        .is_some_and(|s| s.selection.primary().is_some());
    if ui
        .add_enabled(has_primary, egui::Button::new(t("selection.delete")))
        .clicked()
    {
        state.delete_selected();
    }
}
