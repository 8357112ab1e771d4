use crate::i18n::{set_lang, t, Lang};
use crate::state::settings::AppSettings;
use crate::state::AppState;

pub fn show(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_grid_settings(ui, state);
                show_arrow_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open && state.show_settings_window;
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.grid"));
    ui.horizontal(|ui| {
        ui.label(t("settings.units_visible"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.units_visible)
                .speed(0.5)
                .range(4.0..=64.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.half_range"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.half_range)
                .speed(1)
                .range(1..=32),
        );
    });
    ui.add_space(10.0);
}

fn show_arrow_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.arrows"));
    ui.horizontal(|ui| {
        ui.label(t("settings.head_length"));
        ui.add(
            egui::DragValue::new(&mut state.settings.arrows.head_length)
                .speed(0.5)
                .range(2.0..=40.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.head_angle"));
        ui.add(
            egui::DragValue::new(&mut state.settings.arrows.head_half_angle_deg)
                .speed(1.0)
                .range(5.0..=80.0)
                .suffix("°"),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.stroke"));
        ui.add(egui::Slider::new(&mut state.settings.arrows.stroke, 0.5..=6.0));
    });
    ui.checkbox(&mut state.settings.arrows.draw_heads_3d, t("settings.heads_3d"));
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.language"));
        let before = state.settings.ui.language;
        ui.selectable_value(&mut state.settings.ui.language, Lang::En, "English");
        ui.selectable_value(&mut state.settings.ui.language, Lang::Ru, "Русский");
        if state.settings.ui.language != before {
            set_lang(state.settings.ui.language);
        }
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.reset")).clicked() {
            state.settings = AppSettings::default();
            set_lang(state.settings.ui.language);
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}
