use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

use crate::{
    animation::ease::Ease,
    foundation::core::{Canvas, Circle},
    foundation::error::{HalftoneError, HalftoneResult},
    layout::lattice::{Lattice, Layout},
    render::svg::{SvgEnvelope, svg_string},
};

/// Everything a single render consumes.
///
/// Missing JSON fields fall back to [`RenderConfig::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output extent; also the SVG `viewBox`.
    pub canvas: Canvas,
    /// Base dot radius the lattice is built from.
    pub base_radius: f64,
    /// Fill color for every dot, written verbatim.
    pub fill: String,
    /// Placement strategy.
    pub layout: Layout,
    /// Radius-progression curve.
    pub ease: Ease,
    /// Optional `id` attribute on the root `<svg>` element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 50.0,
                height: 50.0,
            },
            base_radius: 0.5,
            fill: "#44FF44".to_string(),
            layout: Layout::Compact,
            ease: Ease::Linear,
            element_id: None,
        }
    }
}

impl RenderConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> HalftoneResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| HalftoneError::serde(format!("parse render config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> HalftoneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HalftoneError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every invariant a render relies on, including that the lattice is non-empty.
    pub fn validate(&self) -> HalftoneResult<()> {
        self.lattice().map(|_| ())
    }

    /// Resolve the lattice this config lays dots on.
    pub fn lattice(&self) -> HalftoneResult<Lattice> {
        Lattice::new(self.layout, self.canvas, self.base_radius)
    }

    /// Lay out the dots without serializing them.
    pub fn circles(&self) -> HalftoneResult<Vec<Circle>> {
        self.lattice()?.circles(self.ease)
    }

    fn envelope(&self) -> SvgEnvelope<'_> {
        SvgEnvelope {
            canvas: self.canvas,
            fill: &self.fill,
            element_id: self.element_id.as_deref(),
        }
    }
}

/// Render a config to an SVG document string.
///
/// Validation happens before any layout, so an invalid config produces no partial output.
#[tracing::instrument(
    skip_all,
    fields(layout = cfg.layout.as_str(), ease = cfg.ease.as_str())
)]
pub fn render_to_string(cfg: &RenderConfig) -> HalftoneResult<String> {
    let circles = cfg.circles()?;
    let doc = svg_string(&cfg.envelope(), &circles);
    tracing::debug!(circles = circles.len(), bytes = doc.len(), "rendered document");
    Ok(doc)
}

/// Render a config and write the document to `w`.
pub fn render_to_writer<W: Write>(cfg: &RenderConfig, mut w: W) -> HalftoneResult<()> {
    let doc = render_to_string(cfg)?;
    w.write_all(doc.as_bytes())?;
    w.flush()?;
    Ok(())
}

/// Render a config and write it to `path`, creating parent directories and truncating any
/// existing file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn render_to_file(cfg: &RenderConfig, path: impl AsRef<Path>) -> HalftoneResult<()> {
    let path = path.as_ref();
    let doc = render_to_string(cfg)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, doc)?;
    Ok(())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> HalftoneResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create output directory '{}'", parent.display())
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
