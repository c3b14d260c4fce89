//! Positional-argument adapter for hosts that call the renderer with loosely typed values,
//! such as a browser page talking to the `wasm` build.
//!
//! The call never fails: arity, type and geometry problems come back as a message string in
//! place of the document.

use crate::{
    animation::ease::Ease,
    foundation::core::Canvas,
    foundation::error::{HalftoneError, HalftoneResult},
    layout::lattice::Layout,
    render::pipeline::{RenderConfig, render_to_string},
};

/// Message returned when the call does not carry exactly [`BRIDGE_ARITY`] values.
pub const ARITY_ERROR: &str = "Invalid number of arguments passed";

/// Expected number of positional values: width, height, radius, color, strategy.
pub const BRIDGE_ARITY: usize = 5;

/// Root element id on bridge-rendered documents, so host pages can address the node.
pub const BRIDGE_ELEMENT_ID: &str = "svg";

/// One loosely typed value handed over by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum BridgeArg {
    /// Numeric value.
    Number(f64),
    /// String value.
    Text(String),
    /// Anything else, described for error messages.
    Unsupported(String),
}

impl BridgeArg {
    fn describe(&self) -> String {
        match self {
            Self::Number(n) => format!("number {n}"),
            Self::Text(s) => format!("string '{s}'"),
            Self::Unsupported(what) => what.clone(),
        }
    }

    fn number(&self, name: &str) -> HalftoneResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(HalftoneError::validation(format!(
                "{name} must be a number, got {}",
                other.describe()
            ))),
        }
    }

    fn text(&self, name: &str) -> HalftoneResult<&str> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(HalftoneError::validation(format!(
                "{name} must be a string, got {}",
                other.describe()
            ))),
        }
    }
}

impl From<f64> for BridgeArg {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for BridgeArg {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Map a strategy name to a layout: `"compact"` selects [`Layout::Compact`], anything else
/// [`Layout::Squared`].
pub fn layout_from_name(name: &str) -> Layout {
    if name == "compact" {
        Layout::Compact
    } else {
        Layout::Squared
    }
}

/// Build the render config described by the five positional values.
///
/// Bridge renders always use [`Ease::Linear`].
pub fn config_from_args(args: &[BridgeArg]) -> HalftoneResult<RenderConfig> {
    let [width, height, radius, color, strategy] = args else {
        return Err(HalftoneError::validation(ARITY_ERROR));
    };

    Ok(RenderConfig {
        canvas: Canvas {
            width: width.number("width")?,
            height: height.number("height")?,
        },
        base_radius: radius.number("radius")?,
        fill: color.text("color")?.to_string(),
        layout: layout_from_name(strategy.text("rendering")?),
        ease: Ease::Linear,
        element_id: Some(BRIDGE_ELEMENT_ID.to_string()),
    })
}

/// Render from positional values, returning either the document or an error message.
pub fn render_args(args: &[BridgeArg]) -> String {
    if args.len() != BRIDGE_ARITY {
        tracing::warn!(got = args.len(), "bridge called with wrong arity");
        return ARITY_ERROR.to_string();
    }
    match config_from_args(args).and_then(|cfg| render_to_string(&cfg)) {
        Ok(doc) => doc,
        Err(e) => e.to_string(),
    }
}

#[cfg(feature = "wasm")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use super::{BridgeArg, render_args};

    impl From<JsValue> for BridgeArg {
        fn from(v: JsValue) -> Self {
            if let Some(n) = v.as_f64() {
                Self::Number(n)
            } else if let Some(s) = v.as_string() {
                Self::Text(s)
            } else {
                Self::Unsupported(format!("{v:?}"))
            }
        }
    }

    /// Render from `[width, height, radius, color, strategy]`.
    #[wasm_bindgen(js_name = halftoneRender)]
    pub fn halftone_render(args: js_sys::Array) -> String {
        let args: Vec<BridgeArg> = args.iter().map(BridgeArg::from).collect();
        render_args(&args)
    }
}

#[cfg(test)]
#[path = "../tests/unit/bridge.rs"]
mod tests;
