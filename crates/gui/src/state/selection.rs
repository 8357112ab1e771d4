use serde::{Deserialize, Serialize};
use shared::{Vector, VectorId};

use crate::format::format_components;
use crate::i18n::t;

use super::store::VectorStore;

/// What a tap did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Tapped vector became the primary selection (secondary cleared)
    SelectedPrimary,
    /// Tapped vector became the comparison partner
    SelectedSecondary,
    /// Unit vector, unknown id, no primary yet, or self-comparison
    Ignored,
}

/// Copy of the selection slots, handed back to the shell after a tap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub primary: Option<VectorId>,
    pub secondary: Option<VectorId>,
}

/// Primary/secondary vector selection.
///
/// Secondary is only ever set while a primary exists and never equals it.
#[derive(Default, Debug, Clone)]
pub struct SelectionState {
    primary: Option<VectorId>,
    secondary: Option<VectorId>,
}

impl SelectionState {
    /// Primary selected vector
    pub fn primary(&self) -> Option<&VectorId> {
        self.primary.as_ref()
    }

    /// Comparison partner of the primary
    pub fn secondary(&self) -> Option<&VectorId> {
        self.secondary.as_ref()
    }

    pub fn is_primary(&self, id: &str) -> bool {
        self.primary.as_deref() == Some(id)
    }

    pub fn is_secondary(&self, id: &str) -> bool {
        self.secondary.as_deref() == Some(id)
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
        }
    }

    /// Apply a tap on `vector`.
    ///
    /// A plain tap replaces the primary and drops the secondary. A tap with
    /// the compare-modifier held sets the secondary, but only when a primary
    /// exists and differs from the tapped vector. Unit vectors are ignored.
    pub fn tap(&mut self, vector: &Vector, compare_held: bool) -> TapOutcome {
        if vector.is_unit_vector {
            return TapOutcome::Ignored;
        }

        if !compare_held {
            self.secondary = None;
            self.primary = Some(vector.id.clone());
            return TapOutcome::SelectedPrimary;
        }

        match &self.primary {
            Some(primary) if *primary != vector.id => {
                self.secondary = Some(vector.id.clone());
                TapOutcome::SelectedSecondary
            }
            _ => TapOutcome::Ignored,
        }
    }

    /// Tap by id, resolving it in `store`. Unknown ids are ignored.
    pub fn tap_in(&mut self, store: &VectorStore, id: &str, compare_held: bool) -> TapOutcome {
        match store.find(id) {
            Some(vector) => self.tap(vector, compare_held),
            None => TapOutcome::Ignored,
        }
    }

    /// Drop any reference to `id`, e.g. after the vector was deleted.
    ///
    /// Forgetting the primary also clears the secondary.
    pub fn forget(&mut self, id: &str) {
        if self.is_primary(id) {
            self.primary = None;
            self.secondary = None;
        } else if self.is_secondary(id) {
            self.secondary = None;
        }
    }

    /// Clear both slots
    pub fn clear(&mut self) {
        self.primary = None;
        self.secondary = None;
    }

    /// Header text describing the primary selection
    pub fn describe(&self, store: &VectorStore) -> String {
        match self.primary.as_deref().and_then(|id| store.find(id)) {
            Some(vector) => format!(
                "{}: {}",
                t("selection.current"),
                format_components(&vector.components)
            ),
            None => t("selection.none").to_string(),
        }
    }
}
