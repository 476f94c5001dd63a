//! Whole-table CSV loading and writing.

use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};

use crate::error::{IngestError, Result};

/// Raw rows preceding the descriptive label row.
const IDENTIFIER_ROWS: usize = 1;

/// Reads a dual-header CSV file into a DataFrame.
///
/// The identifier row is skipped so that the descriptive label row becomes
/// the column header, which is the naming a [`crate::RenameMap`] is keyed on.
/// Empty fields load as nulls.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(IDENTIFIER_ROWS)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );

    Ok(df)
}

/// Writes a DataFrame as CSV with a single header row.
pub fn write_csv_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote table"
    );

    Ok(())
}
