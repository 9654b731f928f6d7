//! In-memory table model: ordered, named, equal-length columns.

mod frame;
mod value;

pub use frame::Table;
pub use value::{Value, format_float, round_half_even};
