//! New-vector input validation.
//!
//! Scalars typed into the editor must be whole numbers, even though stored
//! vectors carry `f64` components. `"2.5"` is rejected on purpose.

use std::fmt;

use shared::{Components, Plane};

/// Raised when editor input cannot become a vector.
///
/// Deliberately carries no detail about which field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidValues,
}

impl ValidationError {
    /// Translation key for the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::InvalidValues => "error.invalid_values",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidValues => write!(f, "Invalid values entered"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse raw editor fields into components.
///
/// Two fields give a planar vector, three a spatial one. Every field must be
/// a signed integer with no surrounding whitespace.
pub fn parse_new_vector<S: AsRef<str>>(raw: &[S]) -> Result<Components, ValidationError> {
    let values = raw
        .iter()
        .map(|field| parse_scalar(field.as_ref()))
        .collect::<Result<Vec<f64>, _>>()?;
    Components::from_slice(&values).ok_or(ValidationError::InvalidValues)
}

/// Like [`parse_new_vector`], but the field count must match `plane`
pub fn parse_for_plane<S: AsRef<str>>(raw: &[S], plane: Plane) -> Result<Components, ValidationError> {
    if raw.len() != plane.dimension() {
        return Err(ValidationError::InvalidValues);
    }
    parse_new_vector(raw)
}

fn parse_scalar(field: &str) -> Result<f64, ValidationError> {
    field
        .parse::<i64>()
        .map(|value| value as f64)
        .map_err(|_| ValidationError::InvalidValues)
}
