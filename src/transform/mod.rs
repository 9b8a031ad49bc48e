//! Region-of-interest geometry primitives.

pub mod roi;
