//! Input parsing: delimited tables and atlas label files.

mod atlas;
mod parser;

pub use atlas::{AtlasEntry, LabelMap, UNKNOWN_LABEL};
pub use parser::{DEFAULT_NA_VALUES, Delimiter, NumericPolicy, Parser, ParserConfig};
