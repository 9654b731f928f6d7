//! Records of what a transform did to a table.

use serde::{Deserialize, Serialize};

/// Which transform produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    /// Powers and first differences of one column.
    Derive,
    /// Atlas labels assigned as column names.
    Relabel,
    /// Columns overwritten from a second table.
    Replace,
}

impl std::fmt::Display for TransformMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformMode::Derive => write!(f, "derive"),
            TransformMode::Relabel => write!(f, "relabel"),
            TransformMode::Replace => write!(f, "replace"),
        }
    }
}

/// A single change made to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformChange {
    /// Column affected (its name after the change).
    pub column: String,

    /// Human-readable description.
    pub description: String,

    /// Number of cells that hold a missing value after the change.
    pub missing_values: usize,
}

/// Result of applying a transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformReport {
    pub mode: TransformMode,

    /// Rows in the output table.
    pub rows: usize,

    /// Columns added to the table.
    pub columns_added: Vec<String>,

    /// Existing columns whose values or names were replaced.
    pub columns_replaced: Vec<String>,

    /// Columns the transform was asked about but left alone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,

    /// Detailed changes, one per touched column.
    pub changes: Vec<TransformChange>,
}

impl TransformReport {
    /// Create an empty report.
    pub fn new(mode: TransformMode, rows: usize) -> Self {
        Self {
            mode,
            rows,
            columns_added: Vec::new(),
            columns_replaced: Vec::new(),
            skipped: Vec::new(),
            changes: Vec::new(),
        }
    }

    pub fn record_added(&mut self, change: TransformChange) {
        self.columns_added.push(change.column.clone());
        self.changes.push(change);
    }

    pub fn record_replaced(&mut self, change: TransformChange) {
        self.columns_replaced.push(change.column.clone());
        self.changes.push(change);
    }

    pub fn record_skipped(&mut self, column: impl Into<String>) {
        self.skipped.push(column.into());
    }

    /// One-line summary for status output.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.columns_added.is_empty() {
            parts.push(format!("{} column(s) added", self.columns_added.len()));
        }
        if !self.columns_replaced.is_empty() {
            parts.push(format!("{} column(s) replaced", self.columns_replaced.len()));
        }
        if !self.skipped.is_empty() {
            parts.push(format!("{} skipped", self.skipped.len()));
        }
        if parts.is_empty() {
            parts.push("no changes".to_string());
        }
        format!("{}: {} ({} rows)", self.mode, parts.join(", "), self.rows)
    }
}
