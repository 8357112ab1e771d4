use serde::{Deserialize, Serialize};

/// Unique identifier of a vector within a plane
pub type VectorId = String;

/// Which coordinate plane a vector (or a store) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plane {
    /// 2D plane with basis i, j
    #[default]
    Planar,
    /// 3D space with basis i, j, k
    Spatial,
}

impl Plane {
    /// Number of scalar components a vector in this plane carries
    pub fn dimension(&self) -> usize {
        match self {
            Plane::Planar => 2,
            Plane::Spatial => 3,
        }
    }

    /// Plane for a component count, if one exists
    pub fn from_dimension(dimension: usize) -> Option<Self> {
        match dimension {
            2 => Some(Plane::Planar),
            3 => Some(Plane::Spatial),
            _ => None,
        }
    }

    pub fn all() -> &'static [Plane] {
        &[Plane::Planar, Plane::Spatial]
    }
}

/// Scalar components of a vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Components {
    Planar { i: f64, j: f64 },
    Spatial { i: f64, j: f64, k: f64 },
}

impl Components {
    pub fn planar(i: f64, j: f64) -> Self {
        Components::Planar { i, j }
    }

    pub fn spatial(i: f64, j: f64, k: f64) -> Self {
        Components::Spatial { i, j, k }
    }

    /// Plane these components live in
    pub fn plane(&self) -> Plane {
        match self {
            Components::Planar { .. } => Plane::Planar,
            Components::Spatial { .. } => Plane::Spatial,
        }
    }

    /// Component values in basis order (i, j[, k])
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            Components::Planar { i, j } => vec![i, j],
            Components::Spatial { i, j, k } => vec![i, j, k],
        }
    }

    /// Build components from an ordered slice of 2 or 3 scalars
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match *values {
            [i, j] => Some(Components::Planar { i, j }),
            [i, j, k] => Some(Components::Spatial { i, j, k }),
            _ => None,
        }
    }

    /// First two components (i, j)
    pub fn ij(&self) -> (f64, f64) {
        match *self {
            Components::Planar { i, j } => (i, j),
            Components::Spatial { i, j, .. } => (i, j),
        }
    }
}

/// A vector record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub id: VectorId,
    pub components: Components,
    /// Short label, shown next to named basis vectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Protected seed vector: never selectable, never deletable
    #[serde(default)]
    pub is_unit_vector: bool,
}

impl Vector {
    pub fn plane(&self) -> Plane {
        self.components.plane()
    }
}

/// Read-only view of one plane's vectors and selection, used for inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneSnapshot {
    pub plane: Plane,
    pub vectors: Vec<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<VectorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<VectorId>,
}
