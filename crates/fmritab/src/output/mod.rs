//! Serialising tables back to delimited text.

mod writer;

pub use writer::{Writer, WriterConfig};
