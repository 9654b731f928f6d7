//! The `Table` type.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::value::Value;
use crate::error::{FmritabError, Result};

/// An ordered collection of uniquely named, equal-length columns.
///
/// Column order is insertion order and is the order columns are written in.
/// The row count is fixed by the first column added.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: IndexMap<String, Vec<Value>>,
    row_count: usize,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, values)` pairs in order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<Value>)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, values) in columns {
            table.append_column(name, values)?;
        }
        Ok(table)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Get a column by position.
    pub fn column_at(&self, index: usize) -> Option<(&str, &[Value])> {
        self.columns
            .get_index(index)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.columns.get_index(col).and_then(|(_, values)| values.get(row))
    }

    /// Values of one row, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.values().map(|c| &c[index]).collect())
    }

    /// Iterate over rows, each as a vector of cell references.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> {
        (0..self.row_count).map(move |i| self.columns.values().map(|c| &c[i]).collect())
    }

    /// Overwrite an existing column, keeping its position.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        self.check_length(name, &values)?;
        let slot = self
            .columns
            .get_mut(name)
            .ok_or_else(|| FmritabError::ColumnNotFound(name.to_string()))?;
        *slot = values;
        Ok(())
    }

    /// Add a new column after the existing ones.
    pub fn append_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(FmritabError::DuplicateColumn(name));
        }
        if self.columns.is_empty() {
            self.row_count = values.len();
        } else {
            self.check_length(&name, &values)?;
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// Assign new names to all columns by position.
    pub fn rename_columns<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.columns.len() {
            return Err(FmritabError::CountMismatch {
                expected: names.len(),
                found: self.columns.len(),
            });
        }

        {
            let mut seen = HashSet::with_capacity(names.len());
            if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
                return Err(FmritabError::DuplicateColumn(dup.clone()));
            }
        }

        let columns = std::mem::take(&mut self.columns);
        self.columns = names
            .into_iter()
            .zip(columns.into_values())
            .collect();
        Ok(())
    }

    fn check_length(&self, name: &str, values: &[Value]) -> Result<()> {
        if values.len() != self.row_count {
            return Err(FmritabError::LengthMismatch {
                column: name.to_string(),
                expected: self.row_count,
                actual: values.len(),
            });
        }
        Ok(())
    }
}

impl PartialEq for Table {
    /// Tables are equal when they hold the same columns in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.row_count == other.row_count && self.columns.iter().eq(other.columns.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::Number).collect()
    }

    #[test]
    fn test_append_preserves_order() {
        let table = Table::from_columns([
            ("b", nums(&[1.0, 2.0])),
            ("a", nums(&[3.0, 4.0])),
        ])
        .unwrap();

        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(1, 1), Some(&Value::Number(4.0)));
    }

    #[test]
    fn test_append_rejects_duplicate_and_wrong_length() {
        let mut table = Table::from_columns([("a", nums(&[1.0, 2.0]))]).unwrap();

        assert!(matches!(
            table.append_column("a", nums(&[1.0, 2.0])),
            Err(FmritabError::DuplicateColumn(_))
        ));
        assert!(matches!(
            table.append_column("b", nums(&[1.0])),
            Err(FmritabError::LengthMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_set_column_keeps_position() {
        let mut table = Table::from_columns([
            ("a", nums(&[1.0])),
            ("b", nums(&[2.0])),
            ("c", nums(&[3.0])),
        ])
        .unwrap();

        table.set_column("b", nums(&[20.0])).unwrap();

        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.column("b"), Some(&[Value::Number(20.0)][..]));
        assert!(matches!(
            table.set_column("z", nums(&[0.0])),
            Err(FmritabError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_rename_columns() {
        let mut table = Table::from_columns([("0", nums(&[1.0])), ("1", nums(&[2.0]))]).unwrap();

        table.rename_columns(["A", "B"]).unwrap();
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(table.column("B"), Some(&[Value::Number(2.0)][..]));

        assert!(matches!(
            table.rename_columns(["A"]),
            Err(FmritabError::CountMismatch { expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_rename_rejects_duplicates() {
        let mut table = Table::from_columns([("0", nums(&[1.0])), ("1", nums(&[2.0]))]).unwrap();
        assert!(matches!(
            table.rename_columns(["A", "A"]),
            Err(FmritabError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn test_rows() {
        let table = Table::from_columns([
            ("a", nums(&[1.0, 2.0])),
            ("b", vec![Value::Missing, Value::Text("x".into())]),
        ])
        .unwrap();

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![&Value::Number(2.0), &Value::Text("x".into())]);
        assert!(table.row(2).is_none());
    }
}
