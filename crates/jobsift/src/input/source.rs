//! In-memory dataset representation and source metadata.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// A single scalar cell value.
///
/// Serializes as the bare JSON value: `null`, a number, or a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing/null value.
    Missing,
    /// Whole number.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Anything else, kept as written.
    Text(String),
}

impl Cell {
    /// Build a typed cell from a raw field.
    pub fn parse(raw: &str) -> Self {
        if is_null_value(raw) {
            return Cell::Missing;
        }

        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Cell::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Cell::Float(f);
            }
        }

        Cell::Text(raw.to_string())
    }

    /// Returns true for a missing cell.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// String form of the cell, or `None` when missing.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Cell::Missing => None,
            Cell::Integer(i) => Some(Cow::Owned(i.to_string())),
            Cell::Float(f) => Some(Cow::Owned(format_float(*f))),
            Cell::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }

    /// Case-insensitive substring test against an already lower-cased needle.
    ///
    /// A missing cell never matches.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.as_text()
            .map(|text| text.to_lowercase().contains(needle))
            .unwrap_or(false)
    }

    /// Total ordering used for sorted option lists.
    ///
    /// Missing sorts first, then numbers (numerically), then text (by code point).
    pub fn cmp_natural(&self, other: &Cell) -> Ordering {
        fn rank(cell: &Cell) -> u8 {
            match cell {
                Cell::Missing => 0,
                Cell::Integer(_) | Cell::Float(_) => 1,
                Cell::Text(_) => 2,
            }
        }

        match (self, other) {
            (Cell::Integer(a), Cell::Integer(b)) => a.cmp(b),
            (Cell::Integer(a), Cell::Float(b)) => (*a as f64).total_cmp(b),
            (Cell::Float(a), Cell::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Cell::Float(a), Cell::Float(b)) => a.total_cmp(b),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::parse(value)
    }
}

/// Render a float the way a data frame would print it (`3.0`, not `3`).
fn format_float(f: f64) -> String {
    let s = f.to_string();
    if s.contains(['.', 'e', 'E']) {
        s
    } else {
        format!("{}.0", s)
    }
}

/// Check if a raw field represents a missing/null value.
pub fn is_null_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
        || trimmed == "."
        || trimmed == "-"
}

static MISSING: Cell = Cell::Missing;

/// A row serialized as column name to value, in column order.
pub type Record = IndexMap<String, Cell>;

/// Parsed tabular data, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Create a dataset. Rows are padded with missing cells or truncated
    /// to the number of columns, and repeated column names are made unique.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let columns = dedupe_columns(columns);
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Missing);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Build a dataset from raw string fields, typing each cell.
    pub fn from_strings<S: AsRef<str>>(columns: &[S], rows: &[Vec<S>]) -> Self {
        let columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|v| Cell::parse(v.as_ref())).collect())
            .collect();
        Self::new(columns, rows)
    }

    /// Column names in original order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a specific cell value.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |row| row.get(index).unwrap_or(&MISSING))
    }

    /// Serialize one row as a record.
    pub fn record(&self, row: usize) -> Option<Record> {
        let cells = self.rows.get(row)?;
        Some(
            self.columns
                .iter()
                .cloned()
                .zip(cells.iter().cloned())
                .collect(),
        )
    }

    /// The first `n` rows as records (fewer if the dataset is smaller).
    pub fn head(&self, n: usize) -> Vec<Record> {
        (0..self.row_count().min(n))
            .filter_map(|i| self.record(i))
            .collect()
    }
}

/// Rename repeated column names to `name.1`, `name.2`, ... so every record
/// keeps one key per column. The first occurrence keeps its name.
fn dedupe_columns(columns: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(columns.len());
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    let mut unique = Vec::with_capacity(columns.len());

    for name in columns {
        if seen.insert(name.clone()) {
            unique.push(name);
            continue;
        }

        let suffix = next_suffix.entry(name.clone()).or_insert(1);
        let renamed = loop {
            let candidate = format!("{}.{}", name, suffix);
            *suffix += 1;
            if !seen.contains(&candidate) {
                break candidate;
            }
        };
        seen.insert(renamed.clone());
        unique.push(renamed);
    }

    unique
}
