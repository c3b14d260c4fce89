//! Dot placement lattices.

pub(crate) mod lattice;
