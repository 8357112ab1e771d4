pub mod modifier;
pub mod popup;
pub mod selection;
pub mod settings;
pub mod store;

use kurbo::Point;
use shared::{Plane, PlaneSnapshot, VectorId};

use crate::geometry::Viewport;
use crate::render::{self, DrawCommand};
use crate::validation::{parse_for_plane, ValidationError};

pub use modifier::ModifierSource;
pub use popup::{PopupState, VectorEditor};
pub use selection::{SelectionSnapshot, SelectionState, TapOutcome};
pub use settings::AppSettings;
pub use store::{StoreError, VectorStore};

/// Vectors and selection of one plane
#[derive(Debug, Clone)]
pub struct PlaneSession {
    pub store: VectorStore,
    pub selection: SelectionState,
}

impl PlaneSession {
    pub fn new(store: VectorStore) -> Self {
        Self {
            store,
            selection: SelectionState::default(),
        }
    }

    /// Session holding the start-up vectors of `plane`
    pub fn seeded(plane: Plane) -> Self {
        Self::new(VectorStore::seeded(plane))
    }

    /// Remove a vector and drop any selection pointing at it
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.store.remove_by_id(id);
        if removed {
            self.selection.forget(id);
        }
        removed
    }

    pub fn snapshot(&self) -> PlaneSnapshot {
        PlaneSnapshot {
            plane: self.store.plane(),
            vectors: self.store.all().to_vec(),
            primary: self.selection.primary().cloned(),
            secondary: self.selection.secondary().cloned(),
        }
    }
}

/// Combined application state
pub struct AppState {
    /// Plane chosen in the navigation panel
    pub active_plane: Option<Plane>,
    pub planar: PlaneSession,
    pub spatial: PlaneSession,
    pub popup: PopupState,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl AppState {
    /// Seeded state with the given settings and no plane chosen yet
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            active_plane: None,
            planar: PlaneSession::seeded(Plane::Planar),
            spatial: PlaneSession::seeded(Plane::Spatial),
            popup: PopupState::Closed,
            settings,
            show_settings_window: false,
        }
    }

    /// Seeded state with settings read from the config dir
    pub fn load() -> Self {
        Self::with_settings(AppSettings::load())
    }

    // ── Navigation ────────────────────────────────────────────

    pub fn session(&self, plane: Plane) -> &PlaneSession {
        match plane {
            Plane::Planar => &self.planar,
            Plane::Spatial => &self.spatial,
        }
    }

    pub fn session_mut(&mut self, plane: Plane) -> &mut PlaneSession {
        match plane {
            Plane::Planar => &mut self.planar,
            Plane::Spatial => &mut self.spatial,
        }
    }

    pub fn active_session(&self) -> Option<&PlaneSession> {
        self.active_plane.map(|p| self.session(p))
    }

    /// Switch the visible plane. An editor opened for the other plane is closed.
    pub fn select_plane(&mut self, plane: Plane) {
        if self.active_plane == Some(plane) {
            return;
        }
        if self.popup.plane().is_some_and(|p| p != plane) {
            self.popup.close();
        }
        self.active_plane = Some(plane);
        tracing::info!("Switched to {:?} plane", plane);
    }

    // ── Editor popup ──────────────────────────────────────────

    /// Open the new-vector editor for the active plane.
    ///
    /// Returns false when no plane is active.
    pub fn open_editor(&mut self) -> bool {
        let Some(plane) = self.active_plane else {
            return false;
        };
        self.popup = PopupState::editing(plane);
        tracing::debug!("Opened {:?} vector editor", plane);
        true
    }

    pub fn cancel_editor(&mut self) {
        if self.popup.is_open() {
            tracing::debug!("Closed vector editor");
        }
        self.popup.close();
    }

    /// Submit the open editor's fields.
    ///
    /// On success the editor closes; on failure it stays open with the error
    /// recorded. Returns `None` when no editor is open.
    pub fn submit_editor(&mut self) -> Option<Result<VectorId, ValidationError>> {
        let plane = self.popup.plane()?;
        let editor = self.popup.editor_mut()?;
        editor.error = None;
        let fields = editor.fields.clone();

        let result = self.submit_new_vector_in(plane, &fields);
        match &result {
            Ok(_) => self.popup.close(),
            Err(e) => {
                if let Some(editor) = self.popup.editor_mut() {
                    editor.error = Some(*e);
                }
            }
        }
        Some(result)
    }

    // ── Core entry points ─────────────────────────────────────

    /// Validate raw fields and add the vector to the active plane.
    ///
    /// Without an active plane the field count decides the plane.
    pub fn submit_new_vector<S: AsRef<str>>(&mut self, raw: &[S]) -> Result<VectorId, ValidationError> {
        let plane = self
            .active_plane
            .or_else(|| Plane::from_dimension(raw.len()))
            .ok_or(ValidationError::InvalidValues)?;
        self.submit_new_vector_in(plane, raw)
    }

    pub fn submit_new_vector_in<S: AsRef<str>>(
        &mut self,
        plane: Plane,
        raw: &[S],
    ) -> Result<VectorId, ValidationError> {
        let components = parse_for_plane(raw, plane).inspect_err(|e| {
            tracing::debug!("Rejected new {:?} vector input: {e}", plane);
        })?;
        self.session_mut(plane).store.add(components, None).map_err(|e| {
            tracing::error!("Validated vector did not fit its store: {e}");
            ValidationError::InvalidValues
        })
    }

    /// Apply a tap on `id` in the active plane, sampling `modifier` now
    pub fn handle_tap(&mut self, id: &str, modifier: &impl ModifierSource) -> SelectionSnapshot {
        match self.active_plane {
            Some(plane) => self.handle_tap_in(plane, id, modifier),
            None => SelectionSnapshot::default(),
        }
    }

    pub fn handle_tap_in(
        &mut self,
        plane: Plane,
        id: &str,
        modifier: &impl ModifierSource,
    ) -> SelectionSnapshot {
        let compare_held = modifier.compare_held();
        let session = self.session_mut(plane);
        let outcome = session.selection.tap_in(&session.store, id, compare_held);
        tracing::debug!("Tap on {} (compare={}) -> {:?}", id, compare_held, outcome);
        session.selection.snapshot()
    }

    /// Delete a vector from the active plane. False for unit vectors and
    /// unknown ids.
    pub fn delete_vector(&mut self, id: &str) -> bool {
        match self.active_plane {
            Some(plane) => self.session_mut(plane).delete(id),
            None => false,
        }
    }

    /// Delete the primary selection of the active plane
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self
            .active_session()
            .and_then(|s| s.selection.primary().cloned())
        else {
            return false;
        };
        self.delete_vector(&id)
    }

    /// Clear the active plane's selection
    pub fn clear_selection(&mut self) {
        if let Some(plane) = self.active_plane {
            self.session_mut(plane).selection.clear();
        }
    }

    /// Draw commands for the active plane; empty until a plane is chosen
    pub fn render(&self, viewport: Viewport) -> Vec<DrawCommand> {
        match self.active_session() {
            Some(s) => render::render(viewport, &s.store, &s.selection, &self.settings),
            None => Vec::new(),
        }
    }

    /// Vector under a screen point in the active plane
    pub fn pick(&self, point: Point, viewport: Viewport) -> Option<VectorId> {
        let s = self.active_session()?;
        render::pick_vector(point, viewport, &s.store, &self.settings)
    }

    /// Header text for the active plane's selection
    pub fn describe_selection(&self) -> String {
        match self.active_session() {
            Some(s) => s.selection.describe(&s.store),
            None => crate::i18n::t("selection.none").to_string(),
        }
    }
}
