pub mod overlay;
pub mod plan;
