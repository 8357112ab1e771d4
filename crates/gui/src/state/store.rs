//! Ordered vector collection for one plane

use std::fmt;

use shared::{Components, Plane, Vector, VectorId};

/// Errors raised by [`VectorStore::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Components belong to a different plane than the store
    DimensionMismatch { expected: Plane, found: Plane },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DimensionMismatch { expected, found } => write!(
                f,
                "Expected {} components, got {}",
                expected.dimension(),
                found.dimension()
            ),
        }
    }
}

impl std::error::Error for StoreError {}

/// Insertion-ordered vectors of a single plane
#[derive(Debug, Clone)]
pub struct VectorStore {
    plane: Plane,
    vectors: Vec<Vector>,
    /// Monotonically increasing mutation counter
    version: u64,
}

impl VectorStore {
    /// Empty store
    pub fn new(plane: Plane) -> Self {
        Self {
            plane,
            vectors: Vec::new(),
            version: 0,
        }
    }

    /// Store holding the start-up vectors of `plane`: two example vectors
    /// followed by the protected basis vectors.
    pub fn seeded(plane: Plane) -> Self {
        let mut store = Self::new(plane);
        match plane {
            Plane::Planar => {
                store.push(Components::planar(2.0, 3.0), None, false);
                store.push(Components::planar(1.0, -4.0), None, false);
                store.push(Components::planar(1.0, 0.0), Some("i".into()), true);
                store.push(Components::planar(0.0, 1.0), Some("j".into()), true);
            }
            Plane::Spatial => {
                store.push(Components::spatial(2.0, 3.0, 1.0), None, false);
                store.push(Components::spatial(-3.0, 1.0, 4.0), None, false);
                store.push(Components::spatial(1.0, 0.0, 0.0), Some("i".into()), true);
                store.push(Components::spatial(0.0, 1.0, 0.0), Some("j".into()), true);
                store.push(Components::spatial(0.0, 0.0, 1.0), Some("k".into()), true);
            }
        }
        store.version = 0;
        store
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// Current store version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Append a new, non-unit vector and return its fresh id
    pub fn add(&mut self, components: Components, name: Option<String>) -> Result<VectorId, StoreError> {
        if components.plane() != self.plane {
            return Err(StoreError::DimensionMismatch {
                expected: self.plane,
                found: components.plane(),
            });
        }
        let id = self.push(components, name, false);
        tracing::info!("Added vector {} {:?} to {:?} store", id, components, self.plane);
        Ok(id)
    }

    /// Append a protected, named basis vector
    pub fn add_unit(&mut self, components: Components, name: &str) -> Result<VectorId, StoreError> {
        if components.plane() != self.plane {
            return Err(StoreError::DimensionMismatch {
                expected: self.plane,
                found: components.plane(),
            });
        }
        Ok(self.push(components, Some(name.to_string()), true))
    }

    fn push(&mut self, components: Components, name: Option<String>, is_unit_vector: bool) -> VectorId {
        let id = uuid::Uuid::new_v4().to_string();
        self.vectors.push(Vector {
            id: id.clone(),
            components,
            name,
            is_unit_vector,
        });
        self.version += 1;
        id
    }

    /// Remove the vector with `id`.
    ///
    /// Returns false when the id is unknown or belongs to a unit vector; the
    /// store is left untouched in both cases.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let Some(pos) = self.vectors.iter().position(|v| v.id == id) else {
            return false;
        };
        if self.vectors[pos].is_unit_vector {
            tracing::debug!("Refusing to remove unit vector {}", id);
            return false;
        }
        self.vectors.remove(pos);
        self.version += 1;
        tracing::info!("Removed vector {} from {:?} store", id, self.plane);
        true
    }

    /// Look a vector up by id
    pub fn find(&self, id: &str) -> Option<&Vector> {
        self.vectors.iter().find(|v| v.id == id)
    }

    /// All vectors in insertion order
    pub fn all(&self) -> &[Vector] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of user-created (non-unit) vectors
    pub fn user_vector_count(&self) -> usize {
        self.vectors.iter().filter(|v| !v.is_unit_vector).count()
    }
}
