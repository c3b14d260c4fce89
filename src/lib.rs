//! Halftone dot-pattern generator.
//!
//! A render turns a [`RenderConfig`] into an SVG document in three steps:
//!
//! 1. **Resolve**: `Layout + Canvas + base radius -> Lattice` (how many rows and columns fit)
//! 2. **Lay out**: `Lattice + Ease -> Vec<Circle>` (one dot per cell, radius eased down the canvas)
//! 3. **Emit**: `Vec<Circle> -> String` (a single fill group inside an `<svg>` root)
//!
//! Two placement strategies are available: [`Layout::Compact`] stacks brick-offset rows
//! `r·√3` apart, [`Layout::Squared`] puts each dot in an `r·√2` square so neighbours touch on
//! the diagonal. Radii grow with row index, reshaped by an [`Ease`] curve.
//!
//! - **No unsafe**: `unsafe` is forbidden outside the generated `wasm` bindings.
//! - **Deterministic**: the same config always renders byte-identical output.
//! - **Fail fast**: invalid geometry is rejected before any output is produced.
//!
//! ```
//! let cfg = halftone::RenderConfig::default();
//! let svg = halftone::render_to_string(&cfg).unwrap();
//! assert!(svg.starts_with(r#"<svg viewBox="0 0 50.0 50.0""#));
//! ```
#![cfg_attr(not(feature = "wasm"), forbid(unsafe_code))]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod layout;
mod render;

pub mod bridge;

pub use animation::ease::Ease;
pub use foundation::core::{Canvas, Circle, Point, validate_radius};
pub use foundation::error::{HalftoneError, HalftoneResult};
pub use layout::lattice::{Lattice, Layout, MAX_CIRCLES};
pub use render::pipeline::{
    RenderConfig, ensure_parent_dir, render_to_file, render_to_string, render_to_writer,
};
pub use render::svg::{SVG_NS, SvgEnvelope, svg_string, write_svg};
