//! SVG serialization and the render entry points built on it.

pub(crate) mod pipeline;
pub(crate) mod svg;
