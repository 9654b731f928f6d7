//! Error types for the fmritab library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fmritab operations.
#[derive(Debug, Error)]
pub enum FmritabError {
    /// Input path does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Error reading or writing a file.
    #[error("IO error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field could not be read as the expected type.
    #[error("Parse error at row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: usize,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data rows.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Number of columns does not match the number of names to assign.
    #[error("Column count mismatch: table has {found} columns but {expected} labels were given")]
    CountMismatch { expected: usize, found: usize },

    /// Two tables that must align row by row have different lengths.
    #[error("Row count mismatch: base has {base} rows, patch has {patch} rows")]
    RowCountMismatch { base: usize, patch: usize },

    /// A column name would appear twice in one table.
    #[error("Duplicate column: '{0}'")]
    DuplicateColumn(String),

    /// A named column does not exist.
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// A column's length differs from the table's row count.
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Bytes that are not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl FmritabError {
    /// Wrap an I/O error for `path`, promoting "not found" to [`FmritabError::FileNotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            FmritabError::FileNotFound { path }
        } else {
            FmritabError::Io { path, source }
        }
    }
}

/// Result type alias for fmritab operations.
pub type Result<T> = std::result::Result<T, FmritabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_not_found_becomes_file_not_found() {
        let err = FmritabError::io(
            "missing.tsv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, FmritabError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "File not found: missing.tsv");
    }

    #[test]
    fn test_invalid_utf8_has_its_own_variant() {
        let err: FmritabError = String::from_utf8(vec![0x61, 0xff]).unwrap_err().into();
        assert!(matches!(err, FmritabError::Utf8(_)));
        assert!(err.to_string().starts_with("Invalid UTF-8:"));
    }

    #[test]
    fn test_io_other_kind_stays_io() {
        let err = FmritabError::io(
            "locked.tsv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, FmritabError::Io { .. }));
    }
}
