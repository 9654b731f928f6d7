//! Atlas ID files: region IDs and labels used as column names.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parser::{read_bytes, whitespace_records};
use crate::error::{FmritabError, Result};

/// Label marking atlas rows that have no timeseries column.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One retained row of an atlas file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasEntry {
    /// Region ID from the first field.
    pub id: String,
    /// Region label from the second field.
    pub label: String,
}

/// Ordered labels read from an atlas file, `Unknown` rows removed.
///
/// Position `n` names the `n`-th timeseries column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMap {
    entries: Vec<AtlasEntry>,
    dropped: usize,
}

impl LabelMap {
    /// Read a whitespace-delimited atlas file. Only the first two fields of
    /// each row are used.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = read_bytes(path)?;
        let map = Self::parse_bytes(&bytes)?;
        debug!(
            path = %path.display(),
            labels = map.len(),
            dropped = map.dropped,
            "loaded atlas labels"
        );
        Ok(map)
    }

    /// Parse atlas text.
    pub fn parse_str(text: &str) -> Result<Self> {
        Self::parse_bytes(text.as_bytes())
    }

    fn parse_bytes(bytes: &[u8]) -> Result<Self> {
        let mut entries = Vec::new();
        for (row_idx, mut fields) in whitespace_records(bytes)?.into_iter().enumerate() {
            if fields.len() < 2 {
                return Err(FmritabError::Parse {
                    row: row_idx + 1,
                    column: fields.len() + 1,
                    message: "atlas rows need an ID and a label".to_string(),
                });
            }
            fields.truncate(2);
            let label = fields.pop().unwrap_or_default();
            let id = fields.pop().unwrap_or_default();
            entries.push(AtlasEntry { id, label });
        }
        Ok(Self::from_entries(entries))
    }

    /// Build from entries in file order, dropping `Unknown` labels.
    pub fn from_entries(entries: impl IntoIterator<Item = AtlasEntry>) -> Self {
        let mut dropped = 0;
        let entries = entries
            .into_iter()
            .filter(|entry| {
                let keep = entry.label != UNKNOWN_LABEL;
                if !keep {
                    debug!(id = %entry.id, "dropping Unknown atlas row");
                    dropped += 1;
                }
                keep
            })
            .collect();
        Self { entries, dropped }
    }

    /// Labels in column order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Label for the column at `position`.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(|e| e.label.as_str())
    }

    pub fn entries(&self) -> &[AtlasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of `Unknown` rows removed.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rows_are_dropped() {
        let map = LabelMap::parse_str("1 A\n2 Unknown\n3 B\n").unwrap();

        assert_eq!(map.labels(), vec!["A", "B"]);
        assert_eq!(map.dropped(), 1);
        assert_eq!(map.get(1), Some("B"));
        assert_eq!(map.entries()[1].id, "3");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let map = LabelMap::parse_str("10\tLeft-Thalamus  0 118 14 0\n\n11 Left-Caudate 122 186 220 0\n")
            .unwrap();
        assert_eq!(map.labels(), vec!["Left-Thalamus", "Left-Caudate"]);
    }

    #[test]
    fn test_unknown_match_is_exact() {
        let map = LabelMap::parse_str("0 unknown\n1 Unknown-Region\n2 Unknown\n").unwrap();
        assert_eq!(map.labels(), vec!["unknown", "Unknown-Region"]);
    }

    #[test]
    fn test_leading_bom_is_stripped() {
        let map = LabelMap::parse_str("\u{feff}1 A\n2 B\n").unwrap();
        assert_eq!(map.entries()[0].id, "1");
    }

    #[test]
    fn test_row_without_label_is_rejected() {
        let err = LabelMap::parse_str("1 A\n2\n").unwrap_err();
        assert!(matches!(err, FmritabError::Parse { row: 2, .. }));
    }
}
