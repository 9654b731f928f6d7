//! Transformation engine for the three table modes.

use tracing::{debug, info};

use crate::error::{FmritabError, Result};
use crate::input::LabelMap;
use crate::table::{Table, Value, round_half_even};

use super::operations::{TransformChange, TransformMode, TransformReport};

/// Suffix of the first-difference column.
pub const DERIVATIVE_SUFFIX: &str = "_derivative1";
/// Suffix of the squared column.
pub const POWER_SUFFIX: &str = "_power2";

/// Most decimal places derive mode will keep; an `f64` carries no more.
pub const MAX_DECIMALS: u32 = 15;

/// Configuration for the transform engine.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Decimal places kept by derive mode.
    pub decimals: u32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self { decimals: 4 }
    }
}

impl TransformConfig {
    /// Set the decimal places, capped at [`MAX_DECIMALS`].
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals.min(MAX_DECIMALS);
        self
    }
}

/// Applies derive, relabel and replace transforms to tables.
pub struct TransformEngine {
    config: TransformConfig,
}

impl TransformEngine {
    /// Create a new transform engine.
    pub fn new() -> Self {
        Self::with_config(TransformConfig::default())
    }

    pub fn with_config(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Build `{label}`, `{label}_derivative1`, `{label}_power2` and
    /// `{label}_derivative1_power2` from a single-column table.
    ///
    /// The first row has no predecessor, so both derivative columns start
    /// with a missing value. Everything is computed at full precision and
    /// rounded half-to-even at the end.
    pub fn derive(&self, input: &Table, label: &str) -> Result<(Table, TransformReport)> {
        let (_, source) = match (input.column_count(), input.column_at(0)) {
            (1, Some(column)) => column,
            (found, _) => return Err(FmritabError::CountMismatch { expected: 1, found }),
        };

        let x: Vec<Option<f64>> = source.iter().map(numeric).collect();
        let derivative: Vec<Option<f64>> = std::iter::once(None)
            .chain(x.windows(2).map(|w| Some(w[1]? - w[0]?)))
            .take(x.len())
            .collect();
        let power = x.iter().map(|v| v.map(|v| v * v));
        let derivative_power = derivative.iter().map(|v| v.map(|v| v * v));

        let derivative_name = format!("{}{}", label, DERIVATIVE_SUFFIX);
        let columns: Vec<(String, Vec<Value>)> = vec![
            (label.to_string(), self.rounded(x.iter().copied())),
            (derivative_name.clone(), self.rounded(derivative.iter().copied())),
            (format!("{}{}", label, POWER_SUFFIX), self.rounded(power)),
            (format!("{}{}", derivative_name, POWER_SUFFIX), self.rounded(derivative_power)),
        ];

        let mut report = TransformReport::new(TransformMode::Derive, input.row_count());
        let mut table = Table::new();
        for (name, values) in columns {
            report.record_added(TransformChange {
                description: format!("Computed '{}'", name),
                missing_values: count_missing(&values),
                column: name.clone(),
            });
            table.append_column(name, values)?;
        }

        info!(label = %label, rows = table.row_count(), "derived columns");
        Ok((table, report))
    }

    /// Name the columns of `table` with atlas labels, by position.
    pub fn relabel(&self, mut table: Table, labels: &LabelMap) -> Result<(Table, TransformReport)> {
        if table.column_count() != labels.len() {
            return Err(FmritabError::CountMismatch {
                expected: labels.len(),
                found: table.column_count(),
            });
        }

        let previous: Vec<String> = table.column_names().map(str::to_string).collect();
        table.rename_columns(labels.labels())?;

        let mut report = TransformReport::new(TransformMode::Relabel, table.row_count());
        for (old, (new, values)) in previous.iter().zip(
            (0..table.column_count()).filter_map(|i| table.column_at(i)),
        ) {
            report.record_replaced(TransformChange {
                column: new.to_string(),
                description: format!("Renamed column '{}' to '{}'", old, new),
                missing_values: count_missing(values),
            });
        }

        info!(columns = table.column_count(), "relabelled columns");
        Ok((table, report))
    }

    /// Overwrite every column of `base` that `patch` also has.
    ///
    /// Columns only in `patch` are ignored, columns only in `base` are kept,
    /// and the column order of `base` is unchanged.
    pub fn replace_columns(
        &self,
        mut base: Table,
        patch: &Table,
    ) -> Result<(Table, TransformReport)> {
        if base.row_count() != patch.row_count() {
            return Err(FmritabError::RowCountMismatch {
                base: base.row_count(),
                patch: patch.row_count(),
            });
        }

        let mut report = TransformReport::new(TransformMode::Replace, base.row_count());
        for (name, values) in (0..patch.column_count()).filter_map(|i| patch.column_at(i)) {
            if !base.has_column(name) {
                debug!(column = name, "column not in base table, ignored");
                report.record_skipped(name);
                continue;
            }

            base.set_column(name, values.to_vec())?;
            report.record_replaced(TransformChange {
                column: name.to_string(),
                description: format!("Replaced '{}'", name),
                missing_values: count_missing(values),
            });
        }

        info!(
            replaced = report.columns_replaced.len(),
            skipped = report.skipped.len(),
            "replaced columns"
        );
        Ok((base, report))
    }

    fn rounded(&self, values: impl Iterator<Item = Option<f64>>) -> Vec<Value> {
        values
            .map(|v| Value::from(v.map(|v| round_half_even(v, self.config.decimals))))
            .collect()
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric view of a cell; text that reads as a number counts.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(v) => Some(*v),
        Value::Text(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
        Value::Missing => None,
    }
}

fn count_missing(values: &[Value]) -> usize {
    values.iter().filter(|v| v.is_missing()).count()
}
