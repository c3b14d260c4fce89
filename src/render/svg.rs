use std::fmt;

use crate::foundation::core::{Canvas, Circle};

/// SVG namespace written on the root element.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Opening tags plus `</g></svg>`; circles are ~40 bytes each.
const ENVELOPE_BYTES: usize = 128;
const CIRCLE_BYTES: usize = 40;

/// Document envelope around the dots.
#[derive(Clone, Copy, Debug)]
pub struct SvgEnvelope<'a> {
    /// Canvas mapped onto the `viewBox`.
    pub canvas: Canvas,
    /// Group fill, written verbatim.
    pub fill: &'a str,
    /// Optional `id` attribute on the root element.
    pub element_id: Option<&'a str>,
}

/// Serialize `circles` as one fill group inside an SVG root.
///
/// The viewBox uses one decimal, circle attributes two; elements are written back to back with
/// no whitespace, so the output is byte-stable for a given input.
pub fn write_svg<W: fmt::Write>(
    w: &mut W,
    envelope: &SvgEnvelope<'_>,
    circles: &[Circle],
) -> fmt::Result {
    write!(
        w,
        r#"<svg viewBox="0 0 {:.1} {:.1}" xmlns="{SVG_NS}""#,
        envelope.canvas.width, envelope.canvas.height
    )?;
    if let Some(id) = envelope.element_id {
        write!(w, r#" id="{id}""#)?;
    }
    w.write_char('>')?;
    write!(w, r#"<g fill="{}">"#, envelope.fill)?;
    for c in circles {
        write!(
            w,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}"/>"#,
            c.center.x, c.center.y, c.radius
        )?;
    }
    w.write_str("</g></svg>")
}

/// [`write_svg`] into a freshly allocated string.
pub fn svg_string(envelope: &SvgEnvelope<'_>, circles: &[Circle]) -> String {
    let mut out = String::with_capacity(
        ENVELOPE_BYTES + envelope.fill.len() + circles.len() * CIRCLE_BYTES,
    );
    let written = write_svg(&mut out, envelope, circles);
    debug_assert!(written.is_ok(), "fmt::Write for String is infallible");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
