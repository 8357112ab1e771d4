//! Main application module

mod keyboard;
mod styles;

use eframe::egui;

use crate::canvas;
use crate::i18n::t;
use crate::state::settings::AppSettings;
use crate::state::AppState;
use crate::ui::{nav_panel, selection_header, settings_window, status_bar, toolbar, vector_popup};

/// Main application
pub struct VectorApp {
    state: AppState,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Settings as last written to disk
    last_saved_settings: AppSettings,
}

impl VectorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;
        let last_saved_settings = state.settings.clone();

        Self {
            state,
            last_font_size,
            last_saved_settings,
        }
    }
}

impl eframe::App for VectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Persist settings once the window is closed
        if !self.state.show_settings_window && self.state.settings != self.last_saved_settings {
            self.state.settings.save();
            self.last_saved_settings = self.state.settings.clone();
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Windows ──────────────────────────────────────────
        settings_window::show(ctx, &mut self.state);
        vector_popup::show(ctx, &mut self.state);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: plane navigation ─────────────────────
        egui::SidePanel::left("nav_panel")
            .default_width(170.0)
            .width_range(140.0..=280.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)))
            .show(ctx, |ui| {
                nav_panel::show(ui, &mut self.state);
            });

        // ── Central panel: header + canvas ───────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.active_plane.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label(t("nav.placeholder"));
                });
                return;
            }
            ui.vertical_centered(|ui| {
                selection_header::show(ui, &mut self.state);
                ui.add_space(6.0);
                canvas::show(ui, &mut self.state);
            });
        });
    }
}
