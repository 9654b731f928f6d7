//! fmritab: column-wise transforms for neuroimaging-derived text tables.
//!
//! Three pipelines share one table model:
//!
//! - **derive**: add first differences and squares of a confound column
//! - **relabel**: name timeseries columns after atlas region labels
//! - **replace**: overwrite columns of one TSV with same-named columns of another
//!
//! Row counts never change, missing values are carried as [`Value::Missing`]
//! and written as `n/a`, and mismatched inputs are errors instead of
//! silently misaligned output.
//!
//! # Example
//!
//! ```no_run
//! use fmritab::TableTools;
//!
//! let tools = TableTools::new();
//! let report = tools
//!     .derive_file("framewise_displacement.txt", "fd_expanded.tsv", "fd")
//!     .unwrap();
//!
//! println!("{}", report.summary());
//! ```

pub mod error;
pub mod input;
pub mod output;
pub mod table;
pub mod transform;

mod tools;

pub use error::{FmritabError, Result};
pub use input::{AtlasEntry, Delimiter, LabelMap, NumericPolicy, Parser, ParserConfig};
pub use output::{Writer, WriterConfig};
pub use table::{Table, Value};
pub use tools::{TableTools, TableToolsConfig, relabel_output_path};
pub use transform::{MAX_DECIMALS, TransformConfig, TransformEngine, TransformMode, TransformReport};
