//! Delimited text writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{FmritabError, Result};
use crate::table::Table;

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Field separator.
    pub delimiter: u8,
    /// Literal written for missing values.
    pub na_rep: String,
    /// Whether to write a header row.
    pub header: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::tsv()
    }
}

impl WriterConfig {
    /// Tab-delimited, `n/a` for missing values.
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            na_rep: "n/a".to_string(),
            header: true,
        }
    }

    /// Comma-delimited, missing values left empty.
    pub fn csv() -> Self {
        Self {
            delimiter: b',',
            na_rep: String::new(),
            header: true,
        }
    }

    pub fn with_na_rep(mut self, na_rep: impl Into<String>) -> Self {
        self.na_rep = na_rep.into();
        self
    }
}

/// Writes tables as delimited text with a header row and no index column.
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Write to `path`, creating or truncating it.
    pub fn write_file(&self, table: &Table, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| FmritabError::io(path, e))?;
        let mut out = BufWriter::new(file);
        self.write_to(table, &mut out)?;
        out.flush().map_err(|e| FmritabError::io(path, e))?;

        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "wrote table"
        );
        Ok(())
    }

    /// Write to any sink.
    pub fn write_to<W: Write>(&self, table: &Table, sink: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .from_writer(sink);

        if self.config.header {
            writer.write_record(table.column_names())?;
        }

        let na_rep = self.config.na_rep.as_str();
        for row in table.rows() {
            writer.write_record(row.iter().map(|v| v.render(na_rep).into_owned()))?;
        }

        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Render to a string.
    pub fn to_string(&self, table: &Table) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(table, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
