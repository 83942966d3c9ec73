//! Receptor grids and the concentration fields accumulated on them

pub mod extent;
pub mod field;

// Re-export main types
pub use extent::GridExtent;
pub use field::{shared_max, ConcentrationField, FieldPeak};
