//! Column-wise transforms: derive, relabel and replace.

mod engine;
mod operations;

pub use engine::{MAX_DECIMALS, TransformConfig, TransformEngine};
pub use operations::{TransformChange, TransformMode, TransformReport};
