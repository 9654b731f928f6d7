//! File-to-file pipelines for the three transforms.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::input::{LabelMap, NumericPolicy, Parser, ParserConfig};
use crate::output::{Writer, WriterConfig};
use crate::transform::{TransformConfig, TransformEngine, TransformReport};

/// Configuration for the file pipelines.
#[derive(Debug, Clone)]
pub struct TableToolsConfig {
    /// How derive mode reads its input column.
    pub numeric: NumericPolicy,
    /// Transform settings.
    pub transform: TransformConfig,
}

impl Default for TableToolsConfig {
    fn default() -> Self {
        Self {
            numeric: NumericPolicy::Permissive,
            transform: TransformConfig::default(),
        }
    }
}

impl TableToolsConfig {
    pub fn with_numeric(mut self, numeric: NumericPolicy) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.transform = self.transform.with_decimals(decimals);
        self
    }
}

/// Reads, transforms and writes delimited files.
pub struct TableTools {
    config: TableToolsConfig,
    engine: TransformEngine,
}

impl TableTools {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::with_config(TableToolsConfig::default())
    }

    pub fn with_config(config: TableToolsConfig) -> Self {
        let engine = TransformEngine::with_config(config.transform.clone());
        Self { config, engine }
    }

    /// Read a headerless single-column tab file, add derivative and power
    /// columns named after `label`, and write a TSV with `n/a` for missing.
    pub fn derive_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        label: &str,
    ) -> Result<TransformReport> {
        let (input, output) = (input.as_ref(), output.as_ref());
        info!(input = %input.display(), label = %label, "derive");

        let parser = Parser::with_config(
            ParserConfig::tsv()
                .with_header(false)
                .with_numeric(self.config.numeric),
        );
        let table = parser.parse_file(input)?;
        let (table, report) = self.engine.derive(&table, label)?;

        Writer::with_config(WriterConfig::tsv()).write_file(&table, output)?;
        Ok(report)
    }

    /// Name the columns of a whitespace-delimited timeseries after the
    /// labels in an atlas file and write it as CSV.
    ///
    /// Without `output` the result goes next to the timeseries, see
    /// [`relabel_output_path`]. Returns the path written.
    pub fn relabel_file(
        &self,
        timeseries: impl AsRef<Path>,
        atlas: impl AsRef<Path>,
        output: Option<&Path>,
    ) -> Result<(PathBuf, TransformReport)> {
        let timeseries = timeseries.as_ref();
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| relabel_output_path(timeseries));
        info!(timeseries = %timeseries.display(), "relabel");

        let table = Parser::with_config(ParserConfig::whitespace()).parse_file(timeseries)?;
        let labels = LabelMap::from_file(atlas)?;
        let (table, report) = self.engine.relabel(table, &labels)?;

        if output == timeseries {
            warn!(path = %output.display(), "overwriting the input timeseries");
        }
        Writer::with_config(WriterConfig::csv()).write_file(&table, &output)?;
        Ok((output, report))
    }

    /// Overwrite the columns of the `base` TSV that also appear in `patch`
    /// and write the result as TSV with `n/a` for missing.
    pub fn replace_file(
        &self,
        base: impl AsRef<Path>,
        patch: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<TransformReport> {
        let (base, patch) = (base.as_ref(), patch.as_ref());
        info!(base = %base.display(), patch = %patch.display(), "replace");

        let parser = Parser::with_config(ParserConfig::tsv());
        let base_table = parser.parse_file(base)?;
        let patch_table = parser.parse_file(patch)?;
        let (table, report) = self.engine.replace_columns(base_table, &patch_table)?;

        Writer::with_config(WriterConfig::tsv()).write_file(&table, output)?;
        Ok(report)
    }
}

impl Default for TableTools {
    fn default() -> Self {
        Self::new()
    }
}

/// Output path for relabelled timeseries: the input with its extension
/// replaced by `.csv`, or `.csv` appended when it has none.
pub fn relabel_output_path(timeseries: &Path) -> PathBuf {
    timeseries.with_extension("csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relabel_output_path() {
        assert_eq!(
            relabel_output_path(Path::new("/data/sub-01_timeseries.txt")),
            PathBuf::from("/data/sub-01_timeseries.csv")
        );
        assert_eq!(
            relabel_output_path(Path::new("sub-01.nii.txt")),
            PathBuf::from("sub-01.nii.csv")
        );
        assert_eq!(
            relabel_output_path(Path::new("timeseries")),
            PathBuf::from("timeseries.csv")
        );
    }

    #[test]
    fn test_config_builders() {
        let config = TableToolsConfig::default()
            .with_numeric(NumericPolicy::Strict)
            .with_decimals(2);
        assert_eq!(config.numeric, NumericPolicy::Strict);
        assert_eq!(config.transform.decimals, 2);
    }
}
