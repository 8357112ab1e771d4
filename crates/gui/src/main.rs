mod app;
mod canvas;
mod ui;

// Re-export library modules so that `crate::state`, `crate::render`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use vecviz_gui_lib::format;
pub use vecviz_gui_lib::geometry;
pub use vecviz_gui_lib::i18n;
pub use vecviz_gui_lib::render;
pub use vecviz_gui_lib::state;

use app::VectorApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vecviz_gui=info,vecviz_gui_lib=info".into()),
        )
        .init();

    let state = state::AppState::load();
    i18n::set_lang(state.settings.ui.language);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(i18n::t("app.title"))
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 540.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "vecviz-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(VectorApp::new(cc, state)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
