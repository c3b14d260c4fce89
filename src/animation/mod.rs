//! Radius-progression curves.

pub(crate) mod ease;
