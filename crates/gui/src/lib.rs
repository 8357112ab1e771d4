// Library crate: exposes testable modules for integration tests and scripted sessions.
// egui-specific modules (app, ui, canvas painting) remain in the binary crate.

pub mod command;
pub mod fixtures;
pub mod format;
pub mod geometry;
pub mod harness;
pub mod i18n;
pub mod render;
pub mod state;
pub mod validation;
