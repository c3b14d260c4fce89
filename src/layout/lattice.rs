use std::f64::consts::SQRT_2;

use crate::{
    animation::ease::Ease,
    foundation::core::{Canvas, Circle, Point, validate_radius},
    foundation::error::{HalftoneError, HalftoneResult},
};

/// Largest number of dots a single lattice may hold.
///
/// Each dot serializes to roughly 40 bytes, so this caps a document at well under a gigabyte.
pub const MAX_CIRCLES: usize = 1 << 24;

/// Dot placement strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Brick-stacked rows spaced `r·√3` apart, leaving the smallest gap possible.
    #[default]
    Compact,
    /// Square cells of side `r·√2`, so neighbouring dots touch on the diagonal.
    Squared,
}

impl Layout {
    /// Both strategies, in declaration order.
    pub const ALL: [Layout; 2] = [Layout::Compact, Layout::Squared];

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Squared => "squared",
        }
    }

    /// Resolve the grid for a canvas and base radius.
    pub fn lattice(self, canvas: Canvas, base_radius: f64) -> HalftoneResult<Lattice> {
        Lattice::new(self, canvas, base_radius)
    }

    /// Lay out every dot for `canvas`, in row-major paint order.
    pub fn circles(
        self,
        canvas: Canvas,
        base_radius: f64,
        ease: Ease,
    ) -> HalftoneResult<Vec<Circle>> {
        self.lattice(canvas, base_radius)?.circles(ease)
    }
}

/// Resolved grid geometry for one (layout, canvas, radius) triple.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Lattice {
    /// Strategy this grid was resolved for.
    pub layout: Layout,
    /// Base dot radius.
    pub base_radius: f64,
    /// Number of rows.
    pub lines: usize,
    /// Number of dots per row.
    pub cols: usize,
    /// Vertical distance between rows.
    pub line_height: f64,
    /// Cell scale relative to the base radius (`1` for compact, `√2` for squared).
    pub cell: f64,
    /// Extra horizontal shift applied to even rows.
    pub row_offset: f64,
    /// Multiplier enlarging each radius so neighbours overlap.
    pub overlay: f64,
}

impl Lattice {
    /// Resolve the grid, rejecting inputs that leave no full row or column.
    pub fn new(layout: Layout, canvas: Canvas, base_radius: f64) -> HalftoneResult<Self> {
        canvas.validate()?;
        validate_radius(base_radius)?;

        let r = base_radius;
        // (line height, cell scale, overlay)
        let (line_height, cell, overlay) = match layout {
            Layout::Compact => (r * 3f64.sqrt(), 1.0, 1.3),
            Layout::Squared => (r * SQRT_2, SQRT_2, 2.0),
        };
        let col_div = r * cell;

        let lines = (canvas.height / line_height).floor();
        let cols = (canvas.width / col_div).floor();
        if !lines.is_finite() || !cols.is_finite() {
            return Err(HalftoneError::validation(format!(
                "{} lattice is unbounded for radius {r}",
                layout.as_str()
            )));
        }
        if lines < 1.0 {
            return Err(HalftoneError::validation(format!(
                "canvas height {} is smaller than one {} row ({line_height})",
                canvas.height,
                layout.as_str()
            )));
        }
        if cols < 1.0 {
            return Err(HalftoneError::validation(format!(
                "canvas width {} is smaller than one {} column ({col_div})",
                canvas.width,
                layout.as_str()
            )));
        }

        let too_many = || {
            HalftoneError::validation(format!(
                "{} lattice of {lines} x {cols} dots exceeds the limit of {MAX_CIRCLES}",
                layout.as_str()
            ))
        };
        if lines > MAX_CIRCLES as f64 || cols > MAX_CIRCLES as f64 {
            return Err(too_many());
        }
        let (lines, cols) = (lines as usize, cols as usize);
        match lines.checked_mul(cols) {
            Some(n) if n <= MAX_CIRCLES => {}
            _ => return Err(too_many()),
        }

        Ok(Self {
            layout,
            base_radius: r,
            lines,
            cols,
            line_height,
            cell,
            row_offset: r * cell,
            overlay,
        })
    }

    /// Horizontal distance between dots in a row.
    pub fn col_step(&self) -> f64 {
        self.base_radius * self.cell * 2.0
    }

    /// Total number of dots.
    pub fn len(&self) -> usize {
        self.lines.saturating_mul(self.cols)
    }

    /// `true` when the grid holds no dots (never the case for a resolved lattice).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Radius of every dot in row `y`.
    ///
    /// Progress is scaled by the base radius and divided back out before easing; the result is
    /// kept bit-compatible with existing renders rather than simplified.
    pub fn row_radius(&self, y: usize, ease: Ease) -> f64 {
        let r = self.base_radius;
        let progress = r * (y as f64 / self.lines as f64);
        let coeff = ease.apply(progress / r);
        progress * coeff * self.overlay
    }

    /// Lay out every dot, row-major.
    pub fn circles(&self, ease: Ease) -> HalftoneResult<Vec<Circle>> {
        tracing::debug!(
            layout = self.layout.as_str(),
            lines = self.lines,
            cols = self.cols,
            ease = ease.as_str(),
            "laying out lattice"
        );

        let mut out = Vec::with_capacity(self.len());
        for y in 0..self.lines {
            let radius = self.row_radius(y, ease);
            if !radius.is_finite() || radius < 0.0 {
                return Err(HalftoneError::evaluation(format!(
                    "row {y} radius evaluated to {radius} with ease '{ease}'"
                )));
            }

            let y_pos = y as f64 * self.line_height;
            let shift = if y % 2 == 0 { self.row_offset } else { 0.0 };
            for x in 0..self.cols {
                let x_pos = x as f64 * self.base_radius * self.cell * 2.0 + shift;
                out.push(Circle::new(Point::new(x_pos, y_pos), radius));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/lattice.rs"]
mod tests;
