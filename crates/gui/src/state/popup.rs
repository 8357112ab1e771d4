//! New-vector editor popup state (data only)
//!
//! The window itself is drawn by ui/vector_popup.rs in the binary crate.

use shared::Plane;

use crate::validation::ValidationError;

/// Raw text of the editor fields plus the last rejection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorEditor {
    /// One entry per basis vector, in i, j[, k] order
    pub fields: Vec<String>,
    pub error: Option<ValidationError>,
}

impl VectorEditor {
    pub fn for_plane(plane: Plane) -> Self {
        Self {
            fields: vec![String::new(); plane.dimension()],
            error: None,
        }
    }
}

/// Which editor, if any, is currently shown
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PopupState {
    #[default]
    Closed,
    EditingPlanar(VectorEditor),
    EditingSpatial(VectorEditor),
}

impl PopupState {
    /// Fresh editor for `plane`
    pub fn editing(plane: Plane) -> Self {
        let editor = VectorEditor::for_plane(plane);
        match plane {
            Plane::Planar => PopupState::EditingPlanar(editor),
            Plane::Spatial => PopupState::EditingSpatial(editor),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, PopupState::Closed)
    }

    /// Plane of the open editor
    pub fn plane(&self) -> Option<Plane> {
        match self {
            PopupState::Closed => None,
            PopupState::EditingPlanar(_) => Some(Plane::Planar),
            PopupState::EditingSpatial(_) => Some(Plane::Spatial),
        }
    }

    pub fn editor(&self) -> Option<&VectorEditor> {
        match self {
            PopupState::Closed => None,
            PopupState::EditingPlanar(e) | PopupState::EditingSpatial(e) => Some(e),
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut VectorEditor> {
        match self {
            PopupState::Closed => None,
            PopupState::EditingPlanar(e) | PopupState::EditingSpatial(e) => Some(e),
        }
    }

    pub fn close(&mut self) {
        *self = PopupState::Closed;
    }
}
