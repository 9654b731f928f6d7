//! Delimited text parser producing [`Table`]s.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{FmritabError, Result};
use crate::table::{Table, Value};

/// Tokens read as missing values (the pandas defaults).
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// How fields are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// A single byte such as `\t` or `,`, read through the csv reader.
    Byte(u8),
    /// Any run of ASCII whitespace. No quoting.
    Whitespace,
}

/// What to do with cells that are not missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Keep cells as text exactly as read.
    #[default]
    Raw,
    /// Parse as numbers; unparsable cells become missing. A column with no
    /// parsable cell at all is still an error.
    Permissive,
    /// Parse as numbers; the first unparsable cell is an error.
    Strict,
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field separator.
    pub delimiter: Delimiter,
    /// Whether the first row names the columns.
    pub has_header: bool,
    /// Quote character (byte delimiters only).
    pub quote: u8,
    /// Cell conversion policy.
    pub numeric: NumericPolicy,
    /// Tokens treated as missing, compared after trimming.
    pub na_values: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Byte(b'\t'),
            has_header: true,
            quote: b'"',
            numeric: NumericPolicy::Raw,
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ParserConfig {
    /// Tab-delimited with a header row.
    pub fn tsv() -> Self {
        Self::default()
    }

    /// Whitespace-delimited without a header row.
    pub fn whitespace() -> Self {
        Self {
            delimiter: Delimiter::Whitespace,
            has_header: false,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_numeric(mut self, numeric: NumericPolicy) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn is_na(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.na_values.iter().any(|na| na == trimmed)
    }
}

/// Parses delimited text files into tables.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a file into a table.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Table> {
        let path = path.as_ref();
        let contents = read_bytes(path)?;
        debug!(path = %path.display(), bytes = contents.len(), "parsing table");
        self.parse_bytes(&contents)
    }

    /// Parse in-memory text.
    pub fn parse_str(&self, text: &str) -> Result<Table> {
        self.parse_bytes(text.as_bytes())
    }

    fn parse_bytes(&self, bytes: &[u8]) -> Result<Table> {
        let mut records = match self.config.delimiter {
            Delimiter::Byte(delimiter) => self.read_delimited(bytes, delimiter)?,
            Delimiter::Whitespace => whitespace_records(bytes)?,
        }
        .into_iter();

        let headers: Vec<String> = if self.config.has_header {
            match records.next() {
                Some(header) => dedupe_headers(header),
                None => return Err(FmritabError::EmptyData("No header row found".to_string())),
            }
        } else {
            Vec::new()
        };
        let records: Vec<Vec<String>> = records.collect();

        // Generate positional names for headerless input; a header alone
        // is a valid table with no rows
        let headers = if self.config.has_header {
            headers
        } else {
            match records.first() {
                Some(first) => (0..first.len()).map(|i| i.to_string()).collect(),
                None => return Err(FmritabError::EmptyData("No data rows found".to_string())),
            }
        };
        if headers.is_empty() {
            return Err(FmritabError::EmptyData("No columns found".to_string()));
        }

        let width = headers.len();
        let mut columns: Vec<Vec<Value>> = vec![Vec::with_capacity(records.len()); width];
        let mut stats = vec![ColumnStats::default(); width];

        for (row_idx, record) in records.into_iter().enumerate() {
            if record.len() > width {
                return Err(FmritabError::Parse {
                    row: row_idx + 1,
                    column: width + 1,
                    message: format!("expected {} fields, found {}", width, record.len()),
                });
            }

            let mut fields = record.into_iter();
            for (col_idx, column) in columns.iter_mut().enumerate() {
                let value = match fields.next() {
                    Some(field) => self.convert(field, row_idx, col_idx, &mut stats[col_idx])?,
                    None => Value::Missing,
                };
                column.push(value);
            }
        }

        if self.config.numeric == NumericPolicy::Permissive {
            for (col_idx, stat) in stats.iter().enumerate() {
                if let (0, Some(row)) = (stat.parsed, stat.first_failure) {
                    return Err(FmritabError::Parse {
                        row: row + 1,
                        column: col_idx + 1,
                        message: format!("column '{}' has no numeric values", headers[col_idx]),
                    });
                }
            }
        }

        Table::from_columns(headers.into_iter().zip(columns))
    }

    fn read_delimited(&self, bytes: &[u8], delimiter: u8) -> Result<Vec<Vec<String>>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            // Blank lines
            if record.len() == 1 && record[0].trim().is_empty() {
                continue;
            }
            records.push(record.iter().map(|s| s.to_string()).collect());
        }
        Ok(records)
    }

    fn convert(
        &self,
        field: String,
        row_idx: usize,
        col_idx: usize,
        stats: &mut ColumnStats,
    ) -> Result<Value> {
        if self.config.is_na(&field) {
            return Ok(Value::Missing);
        }

        match self.config.numeric {
            NumericPolicy::Raw => Ok(Value::Text(field)),
            NumericPolicy::Permissive | NumericPolicy::Strict => {
                match field.trim().parse::<f64>() {
                    Ok(v) => {
                        stats.parsed += 1;
                        Ok(Value::number(v))
                    }
                    Err(_) if self.config.numeric == NumericPolicy::Strict => {
                        Err(FmritabError::Parse {
                            row: row_idx + 1,
                            column: col_idx + 1,
                            message: format!("'{}' is not a number", field),
                        })
                    }
                    Err(_) => {
                        debug!(row = row_idx + 1, column = col_idx + 1, value = %field, "non-numeric cell read as missing");
                        stats.first_failure.get_or_insert(row_idx);
                        Ok(Value::Missing)
                    }
                }
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
struct ColumnStats {
    parsed: usize,
    first_failure: Option<usize>,
}

pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| FmritabError::io(path, e))?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|e| FmritabError::io(path, e))?;
    Ok(contents)
}

/// Split non-blank lines on runs of ASCII whitespace.
pub(crate) fn whitespace_records(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let text = std::str::from_utf8(bytes).map_err(|e| FmritabError::Parse {
        row: 0,
        column: 0,
        message: format!("invalid UTF-8: {}", e),
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_ascii_whitespace().map(str::to_string).collect())
        .collect())
}

/// Make header names unique: repeats become `name.1`, `name.2`, ...
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<String> = Vec::with_capacity(headers.len());

    for header in headers {
        let mut name = header.clone();
        while out.contains(&name) {
            let n = counts.entry(header.clone()).or_insert(0);
            *n += 1;
            name = format!("{}.{}", header, n);
        }
        out.push(name);
    }
    out
}
