//! Guide constructors keyed off the aspect-fitted frame.

pub mod center;
pub mod label;
pub mod symmetry;
