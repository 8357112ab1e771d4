//! Factory functions for creating test data.
//!
//! Provides helpers to construct vectors and stores used in tests and by
//! scripted sessions.

use shared::{Components, Plane, Vector};

use crate::state::{PlaneSession, VectorStore};

// ── Vector factories ────────────────────────────────────────────

/// Create an unnamed 2D vector.
pub fn planar_vector(id: &str, i: f64, j: f64) -> Vector {
    Vector {
        id: id.to_string(),
        components: Components::planar(i, j),
        name: None,
        is_unit_vector: false,
    }
}

/// Create an unnamed 3D vector.
pub fn spatial_vector(id: &str, i: f64, j: f64, k: f64) -> Vector {
    Vector {
        id: id.to_string(),
        components: Components::spatial(i, j, k),
        name: None,
        is_unit_vector: false,
    }
}

/// Create a named unit basis vector.
pub fn unit_vector(id: &str, name: &str, components: Components) -> Vector {
    Vector {
        id: id.to_string(),
        components,
        name: Some(name.to_string()),
        is_unit_vector: true,
    }
}

// ── Store factories ─────────────────────────────────────────────

/// Components of each unit basis vector of `plane`, with its name.
pub fn basis(plane: Plane) -> Vec<(&'static str, Components)> {
    match plane {
        Plane::Planar => vec![
            ("i", Components::planar(1.0, 0.0)),
            ("j", Components::planar(0.0, 1.0)),
        ],
        Plane::Spatial => vec![
            ("i", Components::spatial(1.0, 0.0, 0.0)),
            ("j", Components::spatial(0.0, 1.0, 0.0)),
            ("k", Components::spatial(0.0, 0.0, 1.0)),
        ],
    }
}

/// Store holding only the unit basis vectors of `plane`.
pub fn basis_store(plane: Plane) -> VectorStore {
    let mut store = VectorStore::new(plane);
    for (name, components) in basis(plane) {
        if let Err(e) = store.add_unit(components, name) {
            tracing::warn!("Fixture skipped unit vector '{name}': {e}");
        }
    }
    store
}

/// Basis store followed by the given user vectors, in order.
///
/// Components of the wrong dimension are skipped.
pub fn store_with(plane: Plane, values: &[&[f64]]) -> VectorStore {
    let mut store = basis_store(plane);
    for components in values.iter().filter_map(|v| Components::from_slice(v)) {
        if let Err(e) = store.add(components, None) {
            tracing::warn!("Fixture skipped vector: {e}");
        }
    }
    store
}

/// Session over [`store_with`] with an empty selection.
pub fn session_with(plane: Plane, values: &[&[f64]]) -> PlaneSession {
    PlaneSession::new(store_with(plane, values))
}
