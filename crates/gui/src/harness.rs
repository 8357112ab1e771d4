//! Headless test harness for programmatic vector manipulation.
//!
//! Drives [`AppState`] exactly like the GUI does, without egui.

use kurbo::Point;
use shared::{Plane, PlaneSnapshot, Vector, VectorId};

use crate::geometry::Viewport;
use crate::render::{ColorRole, DrawCommand};
use crate::state::{AppSettings, AppState, SelectionSnapshot};
use crate::validation::ValidationError;

/// Canvas size used by the GUI
pub const DEFAULT_CANVAS: f64 = 450.0;

/// Headless test harness: owns the app state and a fixed canvas
pub struct TestHarness {
    pub state: AppState,
    pub viewport: Viewport,
    /// Compare-modifier as last reported by the "keyboard"
    modifier_held: bool,
    last_commands: Vec<DrawCommand>,
}

impl TestHarness {
    /// Seeded harness showing the 2D plane
    pub fn new() -> Self {
        Self::on_plane(Plane::Planar)
    }

    /// Seeded harness showing `plane`
    pub fn on_plane(plane: Plane) -> Self {
        let mut state = AppState::with_settings(AppSettings::default());
        state.select_plane(plane);
        Self {
            state,
            viewport: Viewport::square(DEFAULT_CANVAS),
            modifier_held: false,
            last_commands: Vec::new(),
        }
    }

    // ── Navigation ────────────────────────────────────────────

    pub fn plane(&self) -> Option<Plane> {
        self.state.active_plane
    }

    pub fn switch_plane(&mut self, plane: Plane) {
        self.state.select_plane(plane);
    }

    // ── Vectors ───────────────────────────────────────────────

    /// Submit raw field strings as the editor would
    pub fn add_vector(&mut self, fields: &[&str]) -> Result<VectorId, ValidationError> {
        self.state.submit_new_vector(fields)
    }

    /// Open the editor, type `fields`, press Add
    pub fn submit_via_editor(&mut self, fields: &[&str]) -> Option<Result<VectorId, ValidationError>> {
        if !self.state.open_editor() {
            return None;
        }
        if let Some(editor) = self.state.popup.editor_mut() {
            for (slot, value) in editor.fields.iter_mut().zip(fields) {
                *slot = value.to_string();
            }
        }
        self.state.submit_editor()
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.state.delete_vector(id)
    }

    pub fn delete_selected(&mut self) -> bool {
        self.state.delete_selected()
    }

    /// Vectors of the active plane in insertion order
    pub fn vectors(&self) -> &[Vector] {
        self.state
            .active_session()
            .map(|s| s.store.all())
            .unwrap_or(&[])
    }

    pub fn vector_count(&self) -> usize {
        self.vectors().len()
    }

    /// Ids of the non-unit vectors of the active plane
    pub fn user_vector_ids(&self) -> Vec<VectorId> {
        self.vectors()
            .iter()
            .filter(|v| !v.is_unit_vector)
            .map(|v| v.id.clone())
            .collect()
    }

    /// Id of the named unit vector (e.g. "i")
    pub fn unit_vector_id(&self, name: &str) -> Option<VectorId> {
        self.vectors()
            .iter()
            .find(|v| v.is_unit_vector && v.name.as_deref() == Some(name))
            .map(|v| v.id.clone())
    }

    pub fn find(&self, id: &str) -> Option<&Vector> {
        self.vectors().iter().find(|v| v.id == id)
    }

    // ── Input ─────────────────────────────────────────────────

    /// Press or release the compare-modifier
    pub fn set_modifier(&mut self, held: bool) {
        self.modifier_held = held;
    }

    /// Tap a vector by id with the current modifier state
    pub fn tap(&mut self, id: &str) -> SelectionSnapshot {
        let held = self.modifier_held;
        self.state.handle_tap(id, &held)
    }

    /// Tap with the modifier held just for this tap
    pub fn compare_tap(&mut self, id: &str) -> SelectionSnapshot {
        self.state.handle_tap(id, &true)
    }

    /// Tap at a screen point, hit-testing like the canvas does
    pub fn tap_at(&mut self, point: Point) -> Option<SelectionSnapshot> {
        let id = self.state.pick(point, self.viewport)?;
        Some(self.tap(&id))
    }

    pub fn selection(&self) -> SelectionSnapshot {
        self.state
            .active_session()
            .map(|s| s.selection.snapshot())
            .unwrap_or_default()
    }

    pub fn describe(&self) -> String {
        self.state.describe_selection()
    }

    // ── Rendering ─────────────────────────────────────────────

    /// Render one frame into the harness
    pub fn render(&mut self) -> &[DrawCommand] {
        self.last_commands = self.state.render(self.viewport);
        &self.last_commands
    }

    pub fn last_commands(&self) -> &[DrawCommand] {
        &self.last_commands
    }

    /// Number of line commands with `role` in the last frame
    pub fn line_count(&self, role: ColorRole) -> usize {
        self.last_commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }) && c.color_role() == role)
            .count()
    }

    /// Label texts of the last frame
    pub fn labels(&self) -> Vec<&str> {
        self.last_commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn snapshot(&self) -> Option<PlaneSnapshot> {
        self.state.active_session().map(|s| s.snapshot())
    }

    /// Export the active plane as JSON
    pub fn export_plane_json(&self) -> String {
        self.snapshot()
            .and_then(|s| serde_json::to_string_pretty(&s).ok())
            .unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
