//! Column-oriented materialization of a set of flattened rows.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::trial::{CellValue, Row};

/// One named column of a [`Table`]. A missing key in some row shows up as
/// a `None` cell at that row's index.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    cells: Vec<Option<CellValue>>,
}

impl Column {
    /// Create a column from a name and its cells.
    #[must_use]
    pub fn new(name: impl Into<String>, cells: Vec<Option<CellValue>>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// The column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cells, one per row.
    #[must_use]
    pub fn cells(&self) -> &[Option<CellValue>] {
        &self.cells
    }

    /// Whether this column must be category-encoded for plotting.
    ///
    /// A column is categorical iff any present cell is a string; numbers
    /// and booleans plot directly.
    #[must_use]
    pub fn is_categorical(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| matches!(cell, CellValue::String(_)))
    }
}

/// A column-oriented table of trial results.
///
/// Columns keep the order in which their keys were first seen across the
/// input rows (or CSV header order). Each load produces a fresh,
/// self-contained snapshot; nothing is shared or cached between loads.
///
/// # Examples
///
/// ```
/// use tuner_dashboard::{CellValue, Row, Table};
///
/// let mut row = Row::new();
/// row.insert("trial_id", CellValue::String("t1".into()));
/// row.insert("units", CellValue::Int(32));
/// row.insert("score", CellValue::Float(0.9));
///
/// let table = Table::from_rows(&[row]);
/// assert_eq!(table.n_cols(), 3);
/// assert_eq!(table.n_rows(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from flattened rows.
    ///
    /// Column order is the order in which keys are first encountered
    /// scanning the rows front to back; rows lacking a key contribute
    /// `None` cells.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut names: Vec<String> = Vec::new();
        for row in rows {
            for key in row.keys() {
                if !names.iter().any(|name| name == key) {
                    names.push(key.to_string());
                }
            }
        }

        let columns = names
            .into_iter()
            .map(|name| {
                let cells = rows.iter().map(|row| row.get(&name).cloned()).collect();
                Column { name, cells }
            })
            .collect();
        Self { columns }
    }

    /// Build a table directly from columns, keeping their order.
    ///
    /// All columns must have the same length.
    #[must_use]
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Read a table from CSV data with a header row.
    ///
    /// A column whose non-empty cells all parse as numbers becomes
    /// numeric; any other column is kept as strings and will be
    /// category-encoded. Empty cells become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Csv`] on malformed CSV input.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let names: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); names.len()];
        for record in csv_reader.records() {
            let record = record?;
            for (index, raw) in raw_columns.iter_mut().enumerate() {
                raw.push(record.get(index).unwrap_or_default().to_string());
            }
        }

        let columns = names
            .into_iter()
            .zip(raw_columns)
            .map(|(name, raw)| Column {
                name,
                cells: parse_csv_column(&raw),
            })
            .collect();
        Ok(Self { columns })
    }

    /// Read a table from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened, or
    /// [`Error::Csv`] on malformed content.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(std::io::BufReader::new(file))
    }

    /// The columns in table order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |column| column.cells.len())
    }

    /// Whether the table has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Write the table as CSV: a header of column names, then one line per
    /// row. `None` cells become empty fields.
    ///
    /// Round-trips with [`from_csv_reader`](Self::from_csv_reader) for
    /// numeric and string columns.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn to_csv(&self, mut writer: impl Write) -> std::io::Result<()> {
        let header = self
            .columns
            .iter()
            .map(|column| csv_escape(&column.name))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{header}")?;

        for row_index in 0..self.n_rows() {
            let line = self
                .columns
                .iter()
                .map(|column| match &column.cells[row_index] {
                    Some(cell) => csv_escape(&cell.to_string()),
                    None => String::new(),
                })
                .collect::<Vec<_>>()
                .join(",");
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    /// Export the table as CSV to a file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.to_csv(std::io::BufWriter::new(file))
    }

    /// Generate a self-contained HTML report with an interactive
    /// parallel-coordinates chart and a data table.
    ///
    /// See [`generate_html_report`](crate::generate_html_report).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written.
    pub fn export_html(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        crate::visualization::generate_html_report(self, path)
    }
}

/// Parse one raw CSV column into typed cells. Numeric only if every
/// non-empty cell parses; otherwise everything stays a string.
fn parse_csv_column(raw: &[String]) -> Vec<Option<CellValue>> {
    let numeric = raw
        .iter()
        .filter(|value| !value.is_empty())
        .all(|value| value.parse::<f64>().is_ok());

    raw.iter()
        .map(|value| {
            if value.is_empty() {
                None
            } else if !numeric {
                Some(CellValue::String(value.clone()))
            } else if let Ok(i) = value.parse::<i64>() {
                Some(CellValue::Int(i))
            } else {
                value.parse::<f64>().ok().map(CellValue::Float)
            }
        })
        .collect()
}

/// Escape a string for CSV output. If the value contains a comma, quote,
/// or newline, wrap it in double-quotes and double any embedded quotes.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
