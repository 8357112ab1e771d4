pub mod nav_panel;
pub mod selection_header;
pub mod settings_window;
pub mod status_bar;
pub mod toolbar;
pub mod vector_popup;
