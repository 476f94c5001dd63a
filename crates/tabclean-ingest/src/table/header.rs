//! Dual header row probing.
//!
//! Source files carry two header rows: raw row 1 holds short machine
//! identifiers and raw row 2 holds the descriptive labels. Only these two
//! records are read; the data rows are never touched.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// The two header rows of a source file, aligned by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPair {
    /// Short identifiers from raw row 1 (the CSV header proper).
    pub names: Vec<String>,
    /// Descriptive labels from raw row 2 (the first data record).
    pub labels: Vec<String>,
}

impl HeaderPair {
    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.names.len()
    }

    /// Iterates `(name, label)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.labels.iter().map(String::as_str))
    }
}

/// Reads the identifier row and the descriptive label row of a CSV file.
///
/// Rows of unequal length are rejected as a parse error.
pub fn read_header_pair(path: &Path) -> Result<HeaderPair> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);
    let mut records = reader.records();

    let mut names = match records.next() {
        Some(record) => record_values(path, record)?,
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };
    let labels = match records.next() {
        Some(record) => record_values(path, record)?,
        None => {
            return Err(IngestError::MissingLabelRow {
                path: path.to_path_buf(),
            });
        }
    };

    if let Some(first) = names.first_mut()
        && first.starts_with('\u{feff}')
    {
        *first = first.trim_start_matches('\u{feff}').to_string();
    }

    tracing::debug!(
        path = %path.display(),
        columns = names.len(),
        "read dual header rows"
    );

    Ok(HeaderPair { names, labels })
}

fn record_values(path: &Path, record: csv::Result<StringRecord>) -> Result<Vec<String>> {
    let record = record.map_err(|e| record_error(path, e))?;
    Ok(record.iter().map(String::from).collect())
}

fn record_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}
