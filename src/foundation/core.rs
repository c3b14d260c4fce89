use crate::foundation::error::{HalftoneError, HalftoneResult};

pub use kurbo::{Circle, Point};

/// Drawing area in output units; also the SVG `viewBox` extent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Canvas {
    /// Build a canvas, rejecting non-finite or non-positive extents.
    pub fn new(width: f64, height: f64) -> HalftoneResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check that both extents are finite and > 0.
    pub fn validate(&self) -> HalftoneResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(HalftoneError::validation(
                "canvas width must be finite and > 0",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(HalftoneError::validation(
                "canvas height must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Check a base dot radius: finite and > 0.
pub fn validate_radius(radius: f64) -> HalftoneResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(HalftoneError::validation(
            "base radius must be finite and > 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
