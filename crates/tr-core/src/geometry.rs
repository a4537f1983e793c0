use crate::{TrError, TrResult};

/// Fixed 2D position of a node, in the coordinate system of its source document.
///
/// Nodes without a position are "free": an external layout engine places them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a position, rejecting NaN and infinite coordinates.
    pub fn new(x: f64, y: f64) -> TrResult<Self> {
        Ok(Self {
            x: ensure_finite(x, "position.x")?,
            y: ensure_finite(y, "position.y")?,
        })
    }

    /// Layout-space coordinates: both axes multiplied by `scale`, y mirrored.
    pub fn scaled(self, scale: f64) -> (f64, f64) {
        (normalize_zero(self.x * scale), normalize_zero(-self.y * scale))
    }
}

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, TrError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TrError::NonFinite { what, value: v })
    }
}

// -0.0 would print as "-0"
fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
